pub mod news_service;
pub mod portfolio_service;
pub mod report_service;
pub mod source_service;

pub use news_service::NewsService;
pub use portfolio_service::PortfolioService;
pub use report_service::ReportService;
pub use source_service::SourceService;
