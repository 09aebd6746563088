use rostergrid_model::Record;
use rostergrid_table::{filter, Column, SortKind, Table, TableEvent};

fn employees() -> Vec<Record> {
    vec![
        Record::new("employee")
            .set("name", "Bob")
            .set("department", "Engineering")
            .set("age", 30i64),
        Record::new("employee")
            .set("name", "Ann")
            .set("department", "Marketing")
            .set("age", 25i64),
        Record::new("employee")
            .set("name", "Cid")
            .set("department", "Engineering")
            .set("age", 25i64),
        Record::new("employee")
            .set("name", "Dee")
            .set("department", "Finance")
            .set("age", 41i64),
        Record::new("employee")
            .set("name", "Eli")
            .set("department", "Engineering")
            .set("age", 38i64),
    ]
}

fn columns() -> Vec<Column<Record>> {
    vec![
        Column::new("name", "Name").sortable(true),
        Column::new("department", "Department"),
        Column::new("age", "Age").sortable(true).sort_kind(SortKind::Number),
        Column::new("hired", "Hired").sortable(true).sort_kind(SortKind::Date),
    ]
}

fn names(table: &Table<Record>, rows: &[Record]) -> Vec<String> {
    table
        .view(rows)
        .rows
        .iter()
        .map(|row| row.cells[0].clone())
        .collect()
}

// ============================================================================
// Filter
// ============================================================================

#[test]
fn test_filter_is_idempotent() {
    let rows = employees();
    let once = filter::apply(&rows, "eng");
    let kept: Vec<Record> = once.iter().map(|&i| rows[i].clone()).collect();
    let twice = filter::apply(&kept, "eng");
    assert_eq!(twice.len(), once.len());
    assert_eq!(twice, (0..kept.len()).collect::<Vec<_>>());
}

#[test]
fn test_search_matches_substring_case_insensitively() {
    let rows = vec![
        Record::new("employee").set("department", "Engineering"),
        Record::new("employee").set("department", "Marketing"),
    ];
    let mut table = Table::new(vec![Column::new("department", "Department")]);

    table.handle(&rows, TableEvent::SearchChanged("eng".into()));
    let view = table.view(&rows);
    assert_eq!(view.rows.len(), 1);
    assert_eq!(view.rows[0].cells[0], "Engineering");
}

#[test]
fn test_search_scans_fields_not_configured_columns() {
    // Only "name" is displayed, but the department field still matches.
    let rows = employees();
    let mut table = Table::new(vec![Column::new("name", "Name")]);

    table.handle(&rows, TableEvent::SearchChanged("finance".into()));
    assert_eq!(names(&table, &rows), vec!["Dee"]);
}

#[test]
fn test_search_resets_page_to_first() {
    let rows = employees();
    let mut table = Table::new(columns()).initial_page_size(2);

    table.handle(&rows, TableEvent::PageSet(3));
    assert_eq!(table.view(&rows).pager.page, 3);

    table.handle(&rows, TableEvent::SearchChanged("e".into()));
    assert_eq!(table.view(&rows).pager.page, 1);
}

// ============================================================================
// Sort
// ============================================================================

#[test]
fn test_numeric_sort_is_stable_for_equal_keys() {
    let rows = vec![
        Record::new("employee").set("name", "Bob").set("age", 30i64),
        Record::new("employee").set("name", "Ann").set("age", 25i64),
        Record::new("employee").set("name", "Cid").set("age", 25i64),
    ];
    let mut table = Table::new(columns());

    table.handle(&rows, TableEvent::SortClicked("age".into()));
    // Ann(25) before Cid(25) preserved, both before Bob(30).
    assert_eq!(names(&table, &rows), vec!["Ann", "Cid", "Bob"]);
}

#[test]
fn test_second_click_reverses_distinct_keys_and_keeps_equal_key_order() {
    let rows = vec![
        Record::new("employee").set("name", "Bob").set("age", 30i64),
        Record::new("employee").set("name", "Ann").set("age", 25i64),
        Record::new("employee").set("name", "Cid").set("age", 25i64),
    ];
    let mut table = Table::new(columns());

    table.handle(&rows, TableEvent::SortClicked("age".into()));
    table.handle(&rows, TableEvent::SortClicked("age".into()));
    // 30 first now, but Ann is still before Cid.
    assert_eq!(names(&table, &rows), vec!["Bob", "Ann", "Cid"]);
}

#[test]
fn test_new_column_click_resets_direction_to_ascending() {
    let rows = employees();
    let mut table = Table::new(columns());

    table.handle(&rows, TableEvent::SortClicked("age".into()));
    table.handle(&rows, TableEvent::SortClicked("age".into()));
    table.handle(&rows, TableEvent::SortClicked("name".into()));
    assert_eq!(names(&table, &rows), vec!["Ann", "Bob", "Cid", "Dee", "Eli"]);
}

#[test]
fn test_non_sortable_column_click_is_ignored() {
    let rows = employees();
    let mut table = Table::new(columns());

    table.handle(&rows, TableEvent::SortClicked("department".into()));
    // Input order untouched.
    assert_eq!(names(&table, &rows), vec!["Bob", "Ann", "Cid", "Dee", "Eli"]);
    assert!(table.sort().active().is_none());
}

#[test]
fn test_date_sort_puts_missing_and_unparseable_first() {
    let rows = vec![
        Record::new("employee").set("name", "Bob").set("hired", "2021-03-01"),
        Record::new("employee").set("name", "Ann").set("hired", "soon"),
        Record::new("employee").set("name", "Cid").set("hired", "2019-11-20"),
        Record::new("employee").set("name", "Dee"),
    ];
    let mut table = Table::new(columns());

    table.handle(&rows, TableEvent::SortClicked("hired".into()));
    // Ann (unparseable) and Dee (missing) both collapse to the epoch and
    // keep their input order ahead of every valid date.
    assert_eq!(names(&table, &rows), vec!["Ann", "Dee", "Cid", "Bob"]);
}

// ============================================================================
// Pagination
// ============================================================================

#[test]
fn test_pages_partition_filtered_rows() {
    let rows = employees();
    let mut table = Table::new(columns()).initial_page_size(2);

    let view = table.view(&rows);
    assert_eq!(view.pager.total_pages, 3);
    assert_eq!(view.pager.total_rows, 5);

    let mut seen = Vec::new();
    let mut counts = Vec::new();
    for page in 1..=3 {
        table.handle(&rows, TableEvent::PageSet(page));
        let page_names = names(&table, &rows);
        counts.push(page_names.len());
        seen.extend(page_names);
    }

    assert_eq!(counts, vec![2, 2, 1]);
    assert_eq!(seen, vec!["Bob", "Ann", "Cid", "Dee", "Eli"]);
}

#[test]
fn test_out_of_range_page_clamps() {
    let rows = employees();
    let mut table = Table::new(columns()).initial_page_size(2);

    table.handle(&rows, TableEvent::PageSet(99));
    assert_eq!(table.view(&rows).pager.page, 3);

    table.handle(&rows, TableEvent::PageSet(0));
    assert_eq!(table.view(&rows).pager.page, 1);
}

#[test]
fn test_page_size_change_resets_to_first_page() {
    let rows = employees();
    let mut table = Table::new(columns()).initial_page_size(2);

    table.handle(&rows, TableEvent::PageSet(3));
    table.handle(&rows, TableEvent::PageSizeSet(25));
    let view = table.view(&rows);
    assert_eq!(view.pager.page, 1);
    assert_eq!(view.rows.len(), 5);
}

#[test]
fn test_oversized_page_size_is_a_single_page() {
    let rows = employees();
    let mut table = Table::new(columns()).initial_page_size(50);

    let view = table.view(&rows);
    assert_eq!(view.pager.total_pages, 1);
    assert_eq!(view.rows.len(), 5);

    // Pager navigation no-ops.
    table.handle(&rows, TableEvent::NextPage);
    assert_eq!(table.view(&rows).pager.page, 1);
}

#[test]
fn test_filter_shrinks_page_count_and_reclamps() {
    let rows = employees();
    let mut table = Table::new(columns()).initial_page_size(2);

    table.handle(&rows, TableEvent::PageSet(3));
    table.handle(&rows, TableEvent::SearchChanged("engineering".into()));
    let view = table.view(&rows);
    assert_eq!(view.pager.page, 1);
    assert_eq!(view.pager.total_pages, 2);
    assert_eq!(view.pager.total_rows, 3);
}

// ============================================================================
// Dual-layer search
// ============================================================================

#[test]
fn test_on_search_fires_on_every_change_and_internal_filter_still_runs() {
    use std::cell::RefCell;
    use std::rc::Rc;

    let queries = Rc::new(RefCell::new(Vec::new()));
    let seen = Rc::clone(&queries);

    let rows = employees();
    let mut table = Table::new(columns())
        .on_search(move |query| seen.borrow_mut().push(query.to_string()));

    table.handle(&rows, TableEvent::SearchChanged("e".into()));
    table.handle(&rows, TableEvent::SearchChanged("en".into()));
    table.handle(&rows, TableEvent::SearchChanged("eng".into()));

    assert_eq!(*queries.borrow(), vec!["e", "en", "eng"]);
    // The client-side substring filter applied regardless of the callback.
    assert_eq!(table.view(&rows).pager.total_rows, 3);
}
