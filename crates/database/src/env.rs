use charchat_common::EnvVars;

pub struct PostgresEnv {
    pub database_url: String,
}

impl EnvVars for PostgresEnv {
    fn load() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .expect("DATABASE_URL is not set"),
        }
    }

    fn get_env_var(&self, key: &str) -> String {
        match key {
            "DATABASE_URL" => self.database_url.clone(),
            _ => panic!("{} is not set", key),
        }
    }
}
