//! Data export formats offered on the settings page.

use crate::system::access::Capability;

use super::simulated_task::SimulatedTask;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportKind {
    Pdf,
    Excel,
    Csv,
    Custom,
}

impl ExportKind {
    pub const ALL: [ExportKind; 4] = [ExportKind::Excel, ExportKind::Pdf, ExportKind::Csv, ExportKind::Custom];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExportKind::Pdf => "PDF",
            ExportKind::Excel => "Excel",
            ExportKind::Csv => "CSV",
            ExportKind::Custom => "Custom",
        }
    }

    pub fn button_label(&self) -> &'static str {
        match self {
            ExportKind::Pdf => "Export to PDF",
            ExportKind::Excel => "Export to Excel",
            ExportKind::Csv => "Export Transactions (CSV)",
            ExportKind::Custom => "Initiate Custom Export",
        }
    }

    /// PDF is available on every plan.
    pub fn required_capability(&self) -> Option<Capability> {
        match self {
            ExportKind::Pdf => None,
            ExportKind::Excel | ExportKind::Csv | ExportKind::Custom => Some(Capability::UnlimitedExport),
        }
    }

    pub fn task(&self, delay_ms: u32) -> SimulatedTask {
        SimulatedTask::new(self.task_name(), delay_ms)
    }

    pub fn completion_message(&self) -> String {
        format!("{} export completed successfully! Check your downloads.", self.as_str())
    }

    fn task_name(&self) -> &'static str {
        match self {
            ExportKind::Pdf => "PDF export",
            ExportKind::Excel => "Excel export",
            ExportKind::Csv => "CSV export",
            ExportKind::Custom => "Custom export",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pdf_is_ungated() {
        let ungated: Vec<_> = ExportKind::ALL
            .into_iter()
            .filter(|k| k.required_capability().is_none())
            .collect();
        assert_eq!(ungated, vec![ExportKind::Pdf]);
        assert_eq!(
            ExportKind::Csv.completion_message(),
            "CSV export completed successfully! Check your downloads."
        );
    }
}
