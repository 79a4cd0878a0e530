#![allow(dead_code)]

use datagrid::{
    Cell, CellValue, ColumnDescriptor, DataType, GridOptions, GridView, HeaderOption, Row,
};

/// name, description, createdOn, expiresOn, lifecycle, members, type
pub const TEAM: &[(&str, &str, i64, i64, f64, f64, &str)] = &[
    ("Alice Johnson", "Project Manager", 1625164800, 1633046400, 90.0, 5.0, "Manager"),
    ("Bob Smith", "Software Engineer", 1625251200, 1633046400, 120.0, 3.0, "Analyst"),
    ("Charlie Davis", "Data Scientist", 1625337600, 1633046400, 60.0, 4.0, "Scientist"),
    ("Diana Clark", "UX Designer", 1625424000, 1633046400, 90.0, 2.0, "Designer"),
    ("Evan Martinez", "Product Owner", 1625510400, 1633046400, 180.0, 7.0, "Owner"),
    ("Fiona Brown", "Business Analyst", 1625596800, 1633046400, 120.0, 6.0, "Analyst"),
    ("George Wilson", "Quality Assurance", 1625683200, 1633046400, 90.0, 4.0, "QA"),
    ("Hannah Moore", "HR Specialist", 1625769600, 1633046400, 60.0, 3.0, "HR"),
    ("Ian Taylor", "DevOps Engineer", 1625856000, 1633046400, 120.0, 5.0, "Engineer"),
    ("Jane Anderson", "Marketing Manager", 1625942400, 1633046400, 90.0, 4.0, "Manager"),
    ("Kevin Lee", "Systems Analyst", 1626028800, 1633046400, 180.0, 6.0, "Analyst"),
    ("Laura Harris", "Sales Executive", 1626115200, 1633046400, 60.0, 5.0, "Analyst"),
    ("Mike Robinson", "Operations Manager", 1626201600, 1633046400, 120.0, 7.0, "Manager"),
    ("Nina Walker", "Finance Officer", 1626288000, 1633046400, 180.0, 4.0, "Officer"),
    ("Oliver White", "Technical Lead", 1626374400, 1633046400, 90.0, 6.0, "Lead"),
    ("Paula King", "Legal Advisor", 1626460800, 1633046400, 120.0, 2.0, "Advisor"),
    ("Quincy Scott", "Customer Support", 1626547200, 1633046400, 60.0, 5.0, "Support"),
    ("Rachel Young", "Content Writer", 1626633600, 1633046400, 90.0, 3.0, "Writer"),
    ("Sam Green", "Network Engineer", 1626720000, 1633046400, 120.0, 4.0, "Engineer"),
    ("Tina Hall", "Project Coordinator", 1626806400, 1633046400, 180.0, 6.0, "Designer"),
    ("Uma Collins", "Security Specialist", 1626892800, 1633046400, 60.0, 3.0, "Specialist"),
    ("Victor Carter", "Research Analyst", 1626979200, 1633046400, 120.0, 4.0, "Analyst"),
    ("Wendy Mitchell", "PR Manager", 1627065600, 1633046400, 90.0, 5.0, "Manager"),
    ("Xander Perez", "Mobile Developer", 1627152000, 1633046400, 180.0, 3.0, "Designer"),
    ("Yvonne Turner", "SEO Specialist", 1627238400, 1633046400, 120.0, 4.0, "Specialist"),
    ("Zachary Adams", "Database Admin", 1627324800, 1633046400, 60.0, 2.0, "Admin"),
    ("Amy Evans", "Software Tester", 1627411200, 1633046400, 90.0, 5.0, "Tester"),
    ("Brian Murphy", "Cloud Architect", 1627497600, 1633046400, 120.0, 3.0, "Architect"),
    ("Cathy Reed", "Graphic Designer", 1627584000, 1633046400, 180.0, 2.0, "Designer"),
    ("David Rogers", "IT Support", 1627670400, 1633046400, 60.0, 4.0, "Support"),
    ("Ella Ward", "Data Analyst", 1627756800, 1633046400, 90.0, 5.0, "Analyst"),
    ("Frank Hughes", "Business Consultant", 1627843200, 1633046400, 120.0, 6.0, "Consultant"),
    ("Grace Patterson", "Event Planner", 1627929600, 1633046400, 180.0, 2.0, "Planner"),
    ("Henry Bell", "Compliance Officer", 1628016000, 1633046400, 60.0, 4.0, "Officer"),
    ("Isabel Foster", "Account Manager", 1628102400, 1633046400, 90.0, 5.0, "Manager"),
    ("Jack Griffin", "Technical Writer", 1628188800, 1633046400, 120.0, 3.0, "Writer"),
    ("Kelly Hughes", "Marketing Analyst", 1628275200, 1633046400, 180.0, 4.0, "Analyst"),
    ("Leo Sullivan", "Communications Specialist", 1628361600, 1633046400, 60.0, 5.0, "Specialist"),
    ("Megan Butler", "Office Manager", 1628448000, 1633046400, 90.0, 6.0, "Manager"),
    ("Nathan Rogers", "Supply Chain Analyst", 1628534400, 1633046400, 120.0, 4.0, "Analyst"),
];

pub fn team_headers() -> Vec<ColumnDescriptor> {
    let options = ["Designer", "Analyst", "Manager"]
        .into_iter()
        .map(|v| HeaderOption {
            value: CellValue::from(v),
            text: v.to_string(),
        })
        .collect();
    vec![
        ColumnDescriptor::new("name", "Name"),
        ColumnDescriptor::new("description", "Description").searchable(),
        ColumnDescriptor::new("createdOn", "Created on").with_data_type(DataType::Date),
        ColumnDescriptor::new("expiresOn", "Expires on"),
        ColumnDescriptor::new("lifecycle", "Lifecycle")
            .with_data_type(DataType::Number)
            .searchable(),
        ColumnDescriptor::new("members", "Members"),
        ColumnDescriptor::new("type", "Type").with_options(options),
    ]
}

pub fn team_rows() -> Vec<Row> {
    TEAM.iter()
        .map(|&(name, description, created, expires, lifecycle, members, kind)| {
            Row::new()
                .with_cell("name", Cell::text(name))
                .with_cell("description", Cell::text(description))
                .with_cell("createdOn", Cell::date(created))
                .with_cell("expiresOn", Cell::date(expires))
                .with_cell("lifecycle", Cell::number(lifecycle))
                .with_cell("members", Cell::number(members))
                .with_cell("type", Cell::text(kind))
        })
        .collect()
}

pub fn team_view(options: GridOptions) -> GridView {
    GridView::new(team_headers(), team_rows(), options).unwrap()
}

/// Row position in `TEAM`, 1-based, looked up by name.
pub fn position(name: &str) -> usize {
    TEAM.iter().position(|t| t.0 == name).unwrap() + 1
}

pub fn names(rows: &[datagrid::RowRef]) -> Vec<String> {
    rows.iter().map(|r| r.text_of("name").into_owned()).collect()
}
