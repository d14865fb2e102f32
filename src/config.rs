use std::env;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CLUSTER: &str = "cluster0.y2gfe.mongodb.net";
const DEFAULT_DATABASE: &str = "coffeeDB";

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub mongodb_uri: String,
    pub database_name: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let host = lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("⚠️  Invalid PORT '{}', using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            None => DEFAULT_PORT,
        };

        // An explicit URI wins; otherwise build the Atlas SRV string from credentials
        let mongodb_uri = lookup("MONGODB_URI").unwrap_or_else(|| {
            let user = lookup("SECRET_USER").unwrap_or_default();
            let key = lookup("SECRET_KEY").unwrap_or_default();
            let cluster = lookup("MONGODB_CLUSTER").unwrap_or_else(|| DEFAULT_CLUSTER.to_string());
            format!(
                "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority&appName=Cluster0",
                urlencoding::encode(&user),
                urlencoding::encode(&key),
                cluster
            )
        });

        let database_name =
            lookup("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.to_string());

        Self {
            host,
            port,
            mongodb_uri,
            database_name,
        }
    }
}
