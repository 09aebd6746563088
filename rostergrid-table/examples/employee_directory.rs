//! Employee directory screen rendered to stdout.
//!
//! Run with: `cargo run -p rostergrid-table --example employee_directory`

use chrono::NaiveDate;
use rostergrid_model::{Record, Value};
use rostergrid_table::{Action, Column, SortKind, Table, TableEvent};
use simplelog::{Config, LevelFilter, SimpleLogger};

fn hire_date(year: i32, month: u32, day: u32) -> Value {
    NaiveDate::from_ymd_opt(year, month, day).into()
}

fn employees() -> Vec<Record> {
    vec![
        Record::new("employee")
            .set("name", "Ann Chee")
            .set("department", "Engineering")
            .set("hired", hire_date(2021, 3, 1))
            .set("salary", 78_000i64),
        Record::new("employee")
            .set("name", "Bob Okafor")
            .set("department", "Marketing")
            .set("hired", hire_date(2019, 11, 20))
            .set("salary", 64_500i64),
        Record::new("employee")
            .set("name", "Cid Alvarez")
            .set("department", "Engineering")
            .set("hired", hire_date(2023, 6, 12))
            .set("salary", 71_200i64),
        Record::new("employee")
            .set("name", "Dee Park")
            .set("department", "Finance")
            .set("hired", hire_date(2020, 1, 8))
            .set("salary", 69_000i64),
        Record::new("employee")
            .set("name", "Eli Novak")
            .set("department", "Engineering")
            .set("hired", hire_date(2022, 9, 30))
            .set("salary", 82_300i64),
    ]
}

fn print_view(table: &Table<Record>, rows: &[Record]) {
    for line in table.view(rows).to_lines() {
        println!("{line}");
    }
    println!();
}

fn main() {
    SimpleLogger::init(LevelFilter::Debug, Config::default()).expect("Failed to initialize logger");

    let rows = employees();

    let mut table = Table::new(vec![
        Column::new("name", "Name").sortable(true),
        Column::new("department", "Department").sortable(true),
        Column::new("hired", "Hired").sortable(true).sort_kind(SortKind::Date),
        Column::new("salary", "Salary")
            .sortable(true)
            .sort_kind(SortKind::Number)
            .render_with(|value: &Value, _: &Record| {
                match value.as_f64() {
                    Some(amount) => format!("${amount:.0}"),
                    None => String::new(),
                }
            }),
    ])
    .search_placeholder("Search employees")
    .filters(["Department: All"])
    .selectable(true)
    .initial_page_size(10)
    .actions(|_| vec![Action::new("edit", "Edit"), Action::new("delete", "Delete")])
    .on_search(|query| println!(">> server-side search: {query:?}"))
    .on_row_click(|row: &Record| {
        let name = row.get_string("name").ok().flatten().unwrap_or("?");
        println!(">> open profile: {name}");
    })
    .on_selection_change(|selected: &[&Record]| println!(">> {} row(s) selected", selected.len()))
    .on_action(|action: &str, row: &Record| {
        let name = row.get_string("name").ok().flatten().unwrap_or("?");
        println!(">> action {action:?} on {name}");
    });

    println!("== initial ==");
    print_view(&table, &rows);

    println!("== sorted by hire date, newest first ==");
    table.handle(&rows, TableEvent::SortClicked("hired".into()));
    table.handle(&rows, TableEvent::SortClicked("hired".into()));
    print_view(&table, &rows);

    println!("== searching \"eng\" ==");
    table.handle(&rows, TableEvent::SearchChanged("eng".into()));
    print_view(&table, &rows);

    println!("== select all on page, then act ==");
    table.handle(&rows, TableEvent::SelectAllToggled);
    table.handle(&rows, TableEvent::RowClicked(0));
    table.handle(
        &rows,
        TableEvent::ActionClicked {
            row: 1,
            action: "edit".into(),
        },
    );
    print_view(&table, &rows);
}
