use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    pub orm: DatabaseConnection,
    pub default_user_id: Option<i32>,
}

impl AppState {
    pub fn new(orm: DatabaseConnection) -> Self {
        Self {
            orm,
            default_user_id: None,
        }
    }

    pub fn with_default_user(mut self, user_id: Option<i32>) -> Self {
        self.default_user_id = user_id;
        self
    }
}
