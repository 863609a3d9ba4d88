//! Example input workbook offered for download.

use rust_xlsxwriter::XlsxError;

use crate::application::services::DEFAULT_INPUT_SHEET;
use crate::infrastructure::spreadsheet::{MemoryWorkbook, xlsx_writer};

/// File name the template is served under.
pub const TEMPLATE_FILE_NAME: &str = "Domain_Generator_Template.xlsx";

/// Campaign (sales play) sheets included in the template, in sheet order.
pub const CAMPAIGN_NAMES: [&str; 30] = [
    "Surface SMC+ENT",
    "Accelerate",
    "Security",
    "AI Transformation BDM ENT",
    "AI Transformation BDM SMC",
    "Innovate AI Apps & Agents ENT",
    "Innovate AI Apps & Agents SMC",
    "Migrate & Modernize ENT",
    "Migrate & Modernize SMEC",
    "Unify your Data Platform ENT",
    "Unify your Data Platform SMEC",
    "Data Security ENT",
    "Data Security SMC",
    "Modern SecOps ENT",
    "Modern SecOps SMC",
    "Protect Cloud ENT",
    "Protect Cloud SMC",
    "Copilot ENT",
    "Copilot SMC",
    "ERP Transformation ENT",
    "ERP Transformation SMC",
    "Low Code ENT",
    "Low Code SMC",
    "Sales Transformation ENT",
    "Sales Transformation SMC",
    "Scale ENT",
    "Secure AI Productivity ENT",
    "Secure AI Productivity SMC",
    "Service Transformation SMC",
    "Healthcare Copilot Dragon",
];

const INPUT_HEADERS: [&str; 6] = [
    "TAL Name",
    "Countries",
    "Campaign (Sales Play)",
    "File Created",
    "Domain Count",
    "Duplicate Domain Found",
];

const CAMPAIGN_HEADERS: [&str; 2] = ["Country", "Domain"];

const SAMPLE_TALS: [(&str, &str, &str); 5] = [
    ("Tech_APAC", "Malaysia, Singapore", "Accelerate"),
    ("Finance_EU", "Germany, France", "Surface SMC+ENT"),
    ("Security_NA", "USA, UK", "Security"),
    ("AI_Global", "USA, Canada, China", "AI Transformation BDM ENT"),
    ("Cloud_EMEA", "Germany, UK, France", "Migrate & Modernize ENT"),
];

const DEFAULT_CAMPAIGN_DATA: &[(&str, &str)] = &[
    ("USA", "example.com"),
    ("USA", "sample.com"),
    ("Germany", "test.com"),
    ("France", "demo.com"),
    ("UK", "company.com"),
    ("Singapore", "business.com"),
];

fn campaign_data(campaign: &str) -> &'static [(&'static str, &'static str)] {
    match campaign {
        "Surface SMC+ENT" => &[
            ("USA", "microsoft.com"),
            ("USA", "apple.com"),
            ("USA", "google.com"),
            ("Germany", "siemens.com"),
            ("Germany", "bmw.com"),
            ("France", "airbus.com"),
            ("UK", "bp.com"),
        ],
        "Accelerate" => &[
            ("Singapore", "dbs.com"),
            ("Singapore", "singtel.com"),
            ("Malaysia", "petronas.com"),
            ("Malaysia", "maybank.com"),
            ("India", "tcs.com"),
            ("India", "infosys.com"),
        ],
        "Security" => &[
            ("USA", "cisco.com"),
            ("USA", "paloaltonetworks.com"),
            ("Israel", "checkpoint.com"),
            ("UK", "bae.com"),
            ("Japan", "ntt.com"),
        ],
        "AI Transformation BDM ENT" => &[
            ("USA", "nvidia.com"),
            ("USA", "openai.com"),
            ("Canada", "shopify.com"),
            ("Canada", "blackberry.com"),
            ("China", "alibaba.com"),
        ],
        _ => DEFAULT_CAMPAIGN_DATA,
    }
}

fn to_row(cells: &[&str]) -> Vec<String> {
    cells.iter().map(|c| c.to_string()).collect()
}

/// Builds the example workbook: the input sheet with five sample rows followed
/// by one sheet per campaign in [`CAMPAIGN_NAMES`].
pub fn template_workbook() -> MemoryWorkbook {
    let mut workbook = MemoryWorkbook::new();

    let mut input = vec![to_row(&INPUT_HEADERS)];
    input.extend(
        SAMPLE_TALS
            .iter()
            .map(|&(tal, countries, campaign)| to_row(&[tal, countries, campaign])),
    );
    workbook.add_sheet(DEFAULT_INPUT_SHEET, input);

    for campaign in CAMPAIGN_NAMES {
        let mut rows = vec![to_row(&CAMPAIGN_HEADERS)];
        rows.extend(
            campaign_data(campaign)
                .iter()
                .map(|&(country, domain)| to_row(&[country, domain])),
        );
        workbook.add_sheet(campaign, rows);
    }

    workbook
}

/// The example workbook rendered as `.xlsx` bytes.
pub fn template_bytes() -> Result<Vec<u8>, XlsxError> {
    xlsx_writer::workbook_to_buffer(&template_workbook())
}
