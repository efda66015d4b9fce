mod dashboard_dto;

pub use dashboard_dto::DashboardOverviewDto;
