pub mod dto;

pub use dto::{
    last_day_of_month, CatchReport, CatchReportRequest, Efficiency, EfficiencyThresholds,
    ExportFormat, ExportRequest, LogbookRow, MonthlyPoint, ReportPeriod, ReportType, SpeciesShare,
    VesselPerformance,
};
