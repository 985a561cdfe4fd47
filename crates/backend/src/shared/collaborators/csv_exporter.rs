use super::{CollaboratorError, ExportedFile, ReportExporter};
use async_trait::async_trait;
use contracts::dashboards::d400_catch_report::{
    CatchReport, ExportFormat, ExportRequest, ReportType,
};
use std::path::PathBuf;

/// Выгрузка отчёта в табличный файл (CSV)
///
/// Формат `excel` отдаётся как CSV, открываемый в табличных редакторах.
/// PDF не поддерживается.
#[derive(Debug, Clone, Default)]
pub struct CsvReportExporter {
    output_dir: Option<PathBuf>,
}

impl CsvReportExporter {
    /// Экспортёр без записи на диск
    pub fn new() -> Self {
        Self { output_dir: None }
    }

    /// Экспортёр, сохраняющий файлы в директорию
    pub fn with_output_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: Some(dir.into()),
        }
    }
}

#[async_trait]
impl ReportExporter for CsvReportExporter {
    async fn export_report(
        &self,
        request: &ExportRequest,
        report: &CatchReport,
    ) -> Result<ExportedFile, CollaboratorError> {
        if request.format != ExportFormat::Excel {
            return Err(CollaboratorError::UnsupportedFormat(request.format.code()));
        }

        let content = render_csv(request.report_type, report)?;
        let file_name = format!("{}.csv", request.file_stem());

        let path = match &self.output_dir {
            Some(dir) => {
                tokio::fs::create_dir_all(dir).await?;
                let path = dir.join(&file_name);
                tokio::fs::write(&path, &content).await?;
                tracing::info!("Report exported to {}", path.display());
                Some(path)
            }
            None => None,
        };

        Ok(ExportedFile {
            file_name,
            format: request.format,
            content,
            path,
        })
    }
}

/// Содержимое CSV для выбранного типа отчёта
pub fn render_csv(report_type: ReportType, report: &CatchReport) -> Result<Vec<u8>, CollaboratorError> {
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(Vec::new());

    match report_type {
        ReportType::Summary => {
            write_totals(&mut writer, report)?;
            writer.write_record([""])?;
            write_species(&mut writer, report)?;
            writer.write_record([""])?;
            write_monthly(&mut writer, report)?;
        }
        ReportType::BySpecies => write_species(&mut writer, report)?,
        ReportType::ByVessel => write_vessels(&mut writer, report)?,
        ReportType::Detailed => write_rows(&mut writer, report)?,
    }

    writer
        .into_inner()
        .map_err(|e| CollaboratorError::Io(e.into_error()))
}

type CsvWriter = csv::Writer<Vec<u8>>;

fn write_totals(writer: &mut CsvWriter, report: &CatchReport) -> Result<(), csv::Error> {
    writer.write_record([
        "Periode",
        "Total Tangkapan (kg)",
        "Tangkapan (ekor)",
        "Kapal Aktif",
        "Trip",
        "Rata-rata per Trip (kg)",
    ])?;
    writer.write_record([
        format!("{} - {}", report.request.date_from, report.request.date_to),
        format!("{:.1}", report.total_quantity),
        format!("{:.0}", report.total_count),
        report.active_vessels.to_string(),
        report.trip_count.to_string(),
        format!("{:.1}", report.avg_per_trip),
    ])
}

fn write_species(writer: &mut CsvWriter, report: &CatchReport) -> Result<(), csv::Error> {
    writer.write_record(["Jenis Ikan", "Jumlah (kg)", "Persentase"])?;
    for share in &report.species {
        writer.write_record([
            share.species.display_name().to_string(),
            format!("{:.1}", share.quantity),
            format!("{:.1}", share.percentage),
        ])?;
    }
    Ok(())
}

fn write_monthly(writer: &mut CsvWriter, report: &CatchReport) -> Result<(), csv::Error> {
    writer.write_record(["Bulan", "Total (kg)", "Kapal", "Trip"])?;
    for point in &report.monthly {
        writer.write_record([
            point.period.clone(),
            format!("{:.1}", point.total_quantity),
            point.vessels.to_string(),
            point.trips.to_string(),
        ])?;
    }
    Ok(())
}

fn write_vessels(writer: &mut CsvWriter, report: &CatchReport) -> Result<(), csv::Error> {
    writer.write_record(["Peringkat", "Nama Kapal", "Trip", "Total Tangkapan (kg)", "Rata-rata per Trip (kg)", "Efisiensi"])?;
    for row in &report.vessels {
        writer.write_record([
            row.rank.to_string(),
            row.vessel_name.clone(),
            row.trips.to_string(),
            format!("{:.1}", row.total_quantity),
            format!("{:.1}", row.avg_per_trip),
            row.efficiency.display_name().to_string(),
        ])?;
    }
    Ok(())
}

fn write_rows(writer: &mut CsvWriter, report: &CatchReport) -> Result<(), csv::Error> {
    writer.write_record(["Kode", "Kapal", "Kapten", "Trip", "Lokasi", "Total (kg)", "Total (ekor)", "Jenis Ikan", "Status"])?;
    for row in &report.rows {
        let species = row
            .species
            .iter()
            .map(|s| s.display_name())
            .collect::<Vec<_>>()
            .join(", ");
        writer.write_record([
            row.code.clone(),
            row.vessel_name.clone(),
            row.captain.clone(),
            row.trip.clone(),
            row.location.clone(),
            format!("{:.1}", row.total_quantity),
            format!("{:.0}", row.total_count),
            species,
            row.status.display_name().to_string(),
        ])?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::dashboards::d400_catch_report::{
        CatchReportRequest, Efficiency, SpeciesShare, VesselPerformance,
    };
    use contracts::domain::a001_vessel::VesselId;
    use contracts::enums::FishSpecies;
    use chrono::NaiveDate;

    fn report(report_type: ReportType) -> CatchReport {
        let request = CatchReportRequest::custom(
            report_type,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        )
        .unwrap();
        CatchReport {
            request,
            total_quantity: 350.0,
            total_count: 0.0,
            trip_count: 1,
            active_vessels: 1,
            avg_per_trip: 350.0,
            species: vec![
                SpeciesShare {
                    species: FishSpecies::Cakalang,
                    quantity: 200.0,
                    percentage: 57.1,
                },
                SpeciesShare {
                    species: FishSpecies::Tuna,
                    quantity: 150.0,
                    percentage: 42.9,
                },
            ],
            vessels: vec![VesselPerformance {
                rank: 1,
                vessel_id: VesselId(1),
                vessel_name: "Bahari Jaya I".into(),
                trips: 1,
                total_quantity: 350.0,
                avg_per_trip: 350.0,
                efficiency: Efficiency::High,
            }],
            monthly: Vec::new(),
            rows: Vec::new(),
        }
    }

    fn export_request(report_type: ReportType, format: ExportFormat) -> ExportRequest {
        ExportRequest {
            report_type,
            date_from: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            date_to: NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
            format,
        }
    }

    #[tokio::test]
    async fn test_excel_export_renders_species_table() {
        let exporter = CsvReportExporter::new();
        let file = exporter
            .export_report(
                &export_request(ReportType::BySpecies, ExportFormat::Excel),
                &report(ReportType::BySpecies),
            )
            .await
            .unwrap();
        assert_eq!(file.file_name, "laporan_by_species_2024-01-01_2024-03-31.csv");
        assert!(file.path.is_none());
        let text = String::from_utf8(file.content).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Jenis Ikan,Jumlah (kg),Persentase");
        assert_eq!(lines[1], "Cakalang,200.0,57.1");
        assert_eq!(lines[2], "Tuna,150.0,42.9");
    }

    #[tokio::test]
    async fn test_vessel_export_has_efficiency_label() {
        let content = render_csv(ReportType::ByVessel, &report(ReportType::ByVessel)).unwrap();
        let text = String::from_utf8(content).unwrap();
        assert!(text.contains("1,Bahari Jaya I,1,350.0,350.0,Tinggi"));
    }

    #[tokio::test]
    async fn test_pdf_export_is_unavailable() {
        let exporter = CsvReportExporter::new();
        let err = exporter
            .export_report(
                &export_request(ReportType::Summary, ExportFormat::Pdf),
                &report(ReportType::Summary),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, CollaboratorError::UnsupportedFormat("pdf")));
    }

    #[tokio::test]
    async fn test_export_writes_file_to_directory() {
        let dir = std::env::temp_dir().join(format!("silog-export-{}", uuid::Uuid::new_v4()));
        let exporter = CsvReportExporter::with_output_dir(&dir);
        let file = exporter
            .export_report(
                &export_request(ReportType::Summary, ExportFormat::Excel),
                &report(ReportType::Summary),
            )
            .await
            .unwrap();
        let path = file.path.clone().unwrap();
        let written = std::fs::read(&path).unwrap();
        assert_eq!(written, file.content);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
