use config::{Config, ConfigError, Environment, File};
use std::sync::OnceLock;

use super::AppConfig;

static APP_CONFIG: OnceLock<AppConfig> = OnceLock::new();

/// 仅用于本地开发的签名密钥，生产环境必须通过 `JWT_SECRET` 覆盖
const DEVELOPMENT_JWT_SECRET: &str = "study-circle-development-secret";

/// 读取第一个存在的环境变量
fn first_env(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| std::env::var(key).ok())
}

impl AppConfig {
    /// 加载配置
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            first_env(&["APP_ENV", "NODE_ENV"]).unwrap_or_else(|| "development".into());

        let mut builder = Config::builder()
            // 内置默认值，保证没有配置文件时也能启动
            .set_default("app.system_name", "Study Circle")?
            .set_default("app.environment", "development")?
            .set_default("app.log_level", "info")?
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.workers", 0)?
            .set_default("server.max_workers", 16)?
            .set_default("server.timeouts.client_request", 5000)?
            .set_default("server.timeouts.client_disconnect", 1000)?
            .set_default("server.timeouts.keep_alive", 75)?
            .set_default("server.limits.max_payload_size", 1_048_576)?
            .set_default("jwt.secret", DEVELOPMENT_JWT_SECRET)?
            .set_default("jwt.cookie_name", "token")?
            .set_default("jwt.token_expiry", 60)?
            .set_default("database.backend", "mongodb")?
            .set_default("database.url", "")?
            .set_default("database.cluster_host", "cluster0.fmfzj.mongodb.net")?
            .set_default("database.user", "")?
            .set_default("database.password", "")?
            .set_default("database.name", "AssignmentsDB")?
            .set_default("database.assignments_collection", "assignments")?
            .set_default("database.submissions_collection", "submissions")?
            .set_default("database.app_name", "Cluster0")?
            .set_default("database.timeout", 10)?
            .set_default("database.upsert_on_update", true)?
            .set_default("cors.allowed_origins", vec!["http://localhost:5173"])?
            .set_default("cors.max_age", 3600)?
            // 首先加载默认配置文件
            .add_source(File::with_name("config").required(false))
            // 然后根据环境加载特定配置文件
            .add_source(File::with_name(&format!("config.{environment}")).required(false))
            // 最后加载环境变量覆盖
            .add_source(
                Environment::with_prefix("STUDY_CIRCLE")
                    .separator("__")
                    .try_parsing(true),
            );

        // 支持从常用环境变量加载
        builder = builder
            .set_override_option("app.environment", first_env(&["APP_ENV", "NODE_ENV"]))?
            .set_override_option("app.log_level", std::env::var("RUST_LOG").ok())?
            .set_override_option("server.host", std::env::var("SERVER_HOST").ok())?
            .set_override_option("server.port", first_env(&["PORT", "SERVER_PORT"]))?
            .set_override_option("server.workers", std::env::var("CPU_COUNT").ok())?
            .set_override_option("jwt.secret", std::env::var("JWT_SECRET").ok())?
            .set_override_option("database.backend", std::env::var("STORAGE_BACKEND").ok())?
            .set_override_option("database.url", std::env::var("DATABASE_URL").ok())?
            .set_override_option("database.user", std::env::var("DB_USER").ok())?
            .set_override_option("database.password", std::env::var("DB_PASS").ok())?
            .set_override_option("database.name", std::env::var("DATABASE_NAME").ok())?;

        let config = builder.build()?;
        let mut app_config: AppConfig = config.try_deserialize()?;

        // 处理工作线程数
        if app_config.server.workers == 0 {
            app_config.server.workers = num_cpus::get().min(app_config.server.max_workers);
        }

        app_config.validate()?;
        Ok(app_config)
    }

    /// 校验配置：生产环境必须提供独立的签名密钥
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.is_production()
            && (self.jwt.secret.is_empty() || self.jwt.secret == DEVELOPMENT_JWT_SECRET)
        {
            return Err(ConfigError::Message(
                "JWT_SECRET must be set in production".to_string(),
            ));
        }
        Ok(())
    }

    /// 获取全局配置实例
    pub fn get() -> &'static AppConfig {
        APP_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                eprintln!("Failed to load configuration: {e}");
                std::process::exit(1);
            })
        })
    }

    /// 初始化配置 (在应用启动时调用)
    pub fn init() -> Result<(), ConfigError> {
        let config = Self::load()?;
        APP_CONFIG
            .set(config)
            .map_err(|_| ConfigError::Message("Configuration already initialized".to_string()))?;
        Ok(())
    }

    /// 检查是否为生产环境
    pub fn is_production(&self) -> bool {
        self.app.environment == "production"
    }

    /// 检查是否为开发环境
    pub fn is_development(&self) -> bool {
        self.app.environment == "development"
    }

    /// 获取服务器绑定地址
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// 获取 MongoDB 连接 URI
    ///
    /// 显式配置的 `database.url` 优先；否则使用 `DB_USER`/`DB_PASS` 拼接 Atlas 地址，
    /// 两者都缺失时回退到本机实例。
    pub fn database_uri(&self) -> String {
        let db = &self.database;
        if !db.url.is_empty() {
            return db.url.clone();
        }
        if db.user.is_empty() || db.password.is_empty() {
            return "mongodb://localhost:27017".to_string();
        }
        format!(
            "mongodb+srv://{}:{}@{}/?retryWrites=true&w=majority&appName={}",
            db.user, db.password, db.cluster_host, db.app_name
        )
    }
}
