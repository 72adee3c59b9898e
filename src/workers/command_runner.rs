use std::path::PathBuf;
use std::time::{Duration, Instant};
use crate::config::config_manager::ConfigManager;
use crate::constants::demo_issues::demo_issues;
use crate::enums::commands::Commands;
use crate::errors::{ErrorHandler, LabelscopeError, LabelscopeResult};
use crate::helpers::config_helper::ConfigHelper;
use crate::logger::progress_logger::ProgressLogger;
use crate::logger::report_logger::ReportLogger;
use crate::server::proxy_server::ProxyServer;
use crate::services::aggregator::Aggregator;
use crate::services::proxy_client::ProxyClient;
use crate::services::query_builder::QueryBuilder;
use crate::services::report_session::ReportSession;
use crate::services::status_resolver::StatusResolver;
use crate::structs::config::config::Config;
use crate::structs::config::filter_config::FilterConfig;
use crate::structs::filter_args::FilterArgs;
use crate::structs::filter_state::FilterState;
use crate::structs::issue::Issue;
use crate::structs::report_output::ReportOutput;

/// Options of one `report` invocation.
pub struct ReportOptions {
    pub filters: FilterArgs,
    pub category: Option<String>,
    pub json: bool,
    pub demo: bool,
    pub watch: Option<u64>,
    pub save: bool,
    pub token: Option<String>,
}

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub const fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> LabelscopeResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init { force } => self.init_command(force),
            Commands::Validate => self.validate_command(),
            Commands::Statuses { token } => self.statuses_command(token).await,
            Commands::Query { filters } => self.query_command(&filters),
            Commands::Report { filters, category, json, demo, watch, save, token } => {
                self.report_command(ReportOptions { filters, category, json, demo, watch, save, token }).await
            }
            Commands::Proxy { port, bind } => self.proxy_command(port, bind).await,
        };

        if let Some(start) = self.start_time {
            log::debug!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        }

        result
    }

    fn config_path(&self) -> LabelscopeResult<PathBuf> {
        ConfigManager::resolve_path(self.config_path.as_deref())
    }

    fn load_config(&self) -> LabelscopeResult<Config> {
        ConfigManager::load(&self.config_path()?)
    }

    fn init_command(&self, force: bool) -> LabelscopeResult<()> {
        log::info!("🚀 Initializing labelscope configuration...");
        let path = self.config_path()?;

        ConfigManager::create_sample_config(&path, force)?;
        log::info!("📝 Edit {} to point at your proxy and project.", path.display());
        log::info!("🔑 Export the API token in the variable named by token_env.");
        log::info!("🔧 Run 'labelscope validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> LabelscopeResult<()> {
        log::info!("🔍 Validating labelscope configuration...");
        let path = self.config_path()?;
        let config = ConfigManager::load_from(&path)?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                if std::env::var(&config.connection.token_env).is_err() {
                    log::warn!("⚠️ {} is not set; reports will need --token", config.connection.token_env);
                }
                Ok(())
            }
            Err(problems) => {
                log::error!("❌ Found {} problem(s):", problems.len());
                for problem in &problems {
                    log::error!("   - {}", problem);
                }
                Err(LabelscopeError::config_error(
                    &format!("{} problem(s) in {}", problems.len(), path.display()),
                    None,
                    Some("Fix the listed fields and run 'labelscope validate' again"),
                ))
            }
        }
    }

    async fn statuses_command(&self, token: Option<String>) -> LabelscopeResult<()> {
        let session = self.open_session(&self.load_config()?, token)?;
        let statuses = session.statuses().await;

        if statuses.is_empty() {
            log::warn!("⚠️ No statuses found for {}", session.connection().project);
            return Ok(());
        }

        println!("\n🏷️ Statuses for {}", session.connection().project);
        for status in &statuses {
            println!("   {:>8}  {:<28} {}", status.id, status.name, status.category_name);
        }
        Ok(())
    }

    fn query_command(&self, args: &FilterArgs) -> LabelscopeResult<()> {
        let config = self.load_config()?;
        let project = ConfigHelper::normalize_project(&config.connection.project);
        if project.is_empty() {
            return Err(LabelscopeError::config_error(
                "Missing connection setting",
                Some("connection.project"),
                Some("Run 'labelscope init' and edit the configuration file"),
            ));
        }

        let filters = args.apply(config.filters.to_filter_state());
        if filters.statuses.is_empty() {
            log::info!("ℹ️ No statuses selected; 'report' adds every project status to this query");
        }
        println!("{}", QueryBuilder::build(&project, &filters));
        Ok(())
    }

    async fn report_command(&self, options: ReportOptions) -> LabelscopeResult<()> {
        if options.demo {
            log::info!("🎭 Using the built-in demo issues");
            let issues = demo_issues();
            return Self::render(&issues, &options, None);
        }

        let path = self.config_path()?;
        let mut config = ConfigManager::load(&path)?;
        let session = self.open_session(&config, options.token.clone())?;

        let mut filters = options.filters.apply(config.filters.to_filter_state());
        if filters.statuses.is_empty() {
            let statuses = session.statuses().await;
            filters.statuses = StatusResolver::default_selection(&statuses);
        }

        if options.save {
            config.filters = FilterConfig::from_filter_state(&filters);
            ConfigManager::save(&config, &path)?;
        }

        let Some(seconds) = options.watch else {
            return Self::report_once(&session, &filters, &options).await;
        };

        let period = Duration::from_secs(seconds.max(1));
        log::info!("👀 Refreshing every {}s, Ctrl+C to stop", period.as_secs());
        loop {
            if let Err(error) = Self::report_once(&session, &filters, &options).await {
                ErrorHandler::handle_error(&error);
            }
            tokio::select! {
                () = tokio::time::sleep(period) => {}
                _ = tokio::signal::ctrl_c() => {
                    log::info!("👋 Stopped watching");
                    return Ok(());
                }
            }
        }
    }

    async fn report_once(
        session: &ReportSession<ProxyClient>,
        filters: &FilterState,
        options: &ReportOptions,
    ) -> LabelscopeResult<()> {
        let mut progress = ProgressLogger::new(&format!("📥 Fetching {}", session.connection().project));
        progress.start();

        let issues = match session.refresh_with_progress(filters, progress.page_reporter()).await {
            Ok(issues) => {
                progress.stop(&format!("Fetched {} issues", issues.len())).await;
                issues
            }
            Err(error) => {
                progress.error("Fetch failed").await;
                return Err(error);
            }
        };

        Self::render(&issues, options, Some(session.query(filters)))
    }

    fn render(issues: &[Issue], options: &ReportOptions, query: Option<String>) -> LabelscopeResult<()> {
        let aggregate = Aggregator::aggregate(issues);
        if aggregate.is_empty() && !issues.is_empty() {
            log::warn!("⚠️ None of the {} issues carry a prefix-value label", issues.len());
        }
        let focus = options.category.as_deref().map(str::to_lowercase);
        let report: ReportOutput = ReportLogger::build(issues, &aggregate, focus.as_deref(), query);

        if options.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            ReportLogger::print(&report);
        }
        Ok(())
    }

    async fn proxy_command(&self, port: Option<u16>, bind: Option<String>) -> LabelscopeResult<()> {
        let mut proxy = self.load_config()?.proxy;
        if let Some(port) = port {
            proxy.port = port;
        }
        if let Some(bind) = bind {
            proxy.bind = bind;
        }

        log::info!("🚀 Starting labelscope proxy...");
        ProxyServer::new(proxy)?.run().await
    }

    fn open_session(&self, config: &Config, token: Option<String>) -> LabelscopeResult<ReportSession<ProxyClient>> {
        let connection = ConfigManager::connection(config, token)?;
        let transport = ProxyClient::new(&connection.proxy_url, config.connection.request_timeout_secs)?;
        log::info!("🔗 {} via {}", connection.host, connection.proxy_url);
        Ok(ReportSession::new(transport, connection, config.connection.page_size))
    }
}
