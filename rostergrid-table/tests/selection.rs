use std::cell::RefCell;
use std::rc::Rc;

use rostergrid_model::Record;
use rostergrid_table::{Action, Column, Table, TableEvent};

fn employees() -> Vec<Record> {
    ["Ann", "Bob", "Cid", "Dee", "Eli"]
        .iter()
        .map(|name| Record::new("employee").set("name", *name))
        .collect()
}

fn columns() -> Vec<Column<Record>> {
    vec![Column::new("name", "Name").sortable(true)]
}

fn name_of(record: &Record) -> String {
    record.get_string("name").unwrap().unwrap_or_default().to_string()
}

// ============================================================================
// Select all
// ============================================================================

#[test]
fn test_select_all_selects_exactly_the_current_page() {
    let emitted: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&emitted);

    let rows = employees();
    let mut table = Table::new(columns())
        .selectable(true)
        .initial_page_size(2)
        .on_selection_change(move |selected: &[&Record]| {
            sink.borrow_mut()
                .push(selected.iter().map(|r| name_of(r)).collect());
        });

    table.handle(&rows, TableEvent::SelectAllToggled);

    assert_eq!(*emitted.borrow(), vec![vec!["Ann".to_string(), "Bob".to_string()]]);
    let view = table.view(&rows);
    assert_eq!(view.select_all, Some(true));
    assert!(view.rows.iter().all(|row| row.selected == Some(true)));
}

#[test]
fn test_select_all_on_full_page_clears() {
    let rows = employees();
    let mut table = Table::new(columns()).selectable(true).initial_page_size(2);

    table.handle(&rows, TableEvent::SelectAllToggled);
    table.handle(&rows, TableEvent::SelectAllToggled);
    let view = table.view(&rows);
    assert_eq!(view.select_all, Some(false));
    assert!(view.rows.iter().all(|row| row.selected == Some(false)));
}

#[test]
fn test_selection_does_not_carry_across_pages() {
    let calls = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&calls);

    let rows = employees();
    let mut table = Table::new(columns())
        .selectable(true)
        .initial_page_size(2)
        .on_selection_change(move |_: &[&Record]| *counter.borrow_mut() += 1);

    table.handle(&rows, TableEvent::SelectAllToggled);
    assert_eq!(*calls.borrow(), 1);

    table.handle(&rows, TableEvent::NextPage);
    let view = table.view(&rows);
    assert_eq!(view.pager.page, 2);
    assert_eq!(view.select_all, Some(false));
    assert!(view.rows.iter().all(|row| row.selected == Some(false)));
    // Invalidation is silent: no extra notification.
    assert_eq!(*calls.borrow(), 1);
}

#[test]
fn test_sort_and_search_drop_selection_silently() {
    let calls = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&calls);

    let rows = employees();
    let mut table = Table::new(columns())
        .selectable(true)
        .on_selection_change(move |_: &[&Record]| *counter.borrow_mut() += 1);

    table.handle(&rows, TableEvent::RowToggled(0));
    assert_eq!(*calls.borrow(), 1);

    table.handle(&rows, TableEvent::SortClicked("name".into()));
    assert!(table.selection().is_empty());

    table.handle(&rows, TableEvent::RowToggled(0));
    assert_eq!(*calls.borrow(), 2);

    table.handle(&rows, TableEvent::SearchChanged("e".into()));
    assert!(table.selection().is_empty());
    assert_eq!(*calls.borrow(), 2);
}

// ============================================================================
// Per-row toggles
// ============================================================================

#[test]
fn test_toggle_emits_materialized_rows_and_untoggle_empties() {
    let emitted: Rc<RefCell<Vec<Vec<String>>>> = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&emitted);

    let rows = employees();
    let mut table = Table::new(columns())
        .selectable(true)
        .initial_page_size(2)
        .on_selection_change(move |selected: &[&Record]| {
            sink.borrow_mut()
                .push(selected.iter().map(|r| name_of(r)).collect());
        });

    table.handle(&rows, TableEvent::RowToggled(1));
    table.handle(&rows, TableEvent::RowToggled(1));

    assert_eq!(
        *emitted.borrow(),
        vec![vec!["Bob".to_string()], Vec::<String>::new()]
    );
}

#[test]
fn test_out_of_range_toggle_is_ignored() {
    let calls = Rc::new(RefCell::new(0usize));
    let counter = Rc::clone(&calls);

    let rows = employees();
    let mut table = Table::new(columns())
        .selectable(true)
        .initial_page_size(2)
        .on_selection_change(move |_: &[&Record]| *counter.borrow_mut() += 1);

    table.handle(&rows, TableEvent::RowToggled(7));
    assert_eq!(*calls.borrow(), 0);
    assert!(table.selection().is_empty());
}

// ============================================================================
// Row clicks and propagation
// ============================================================================

#[test]
fn test_row_click_receives_the_full_row() {
    let clicked = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&clicked);

    let rows = employees();
    let mut table = Table::new(columns())
        .on_row_click(move |row: &Record| sink.borrow_mut().push(name_of(row)));

    assert!(table.view(&rows).rows[0].clickable);
    table.handle(&rows, TableEvent::RowClicked(2));
    assert_eq!(*clicked.borrow(), vec!["Cid"]);
}

#[test]
fn test_rows_are_not_clickable_without_a_handler() {
    let rows = employees();
    let table = Table::new(columns());
    assert!(!table.view(&rows).rows[0].clickable);
}

#[test]
fn test_checkbox_and_action_clicks_never_bubble_to_row_click() {
    let clicks = Rc::new(RefCell::new(0usize));
    let actions: Rc<RefCell<Vec<(String, String)>>> = Rc::new(RefCell::new(Vec::new()));
    let click_counter = Rc::clone(&clicks);
    let action_sink = Rc::clone(&actions);

    let rows = employees();
    let mut table = Table::new(columns())
        .selectable(true)
        .actions(|_| vec![Action::new("edit", "Edit"), Action::new("delete", "Delete")])
        .on_row_click(move |_: &Record| *click_counter.borrow_mut() += 1)
        .on_action(move |action: &str, row: &Record| {
            action_sink.borrow_mut().push((action.to_string(), name_of(row)));
        });

    table.handle(&rows, TableEvent::RowToggled(0));
    table.handle(
        &rows,
        TableEvent::ActionClicked {
            row: 1,
            action: "delete".into(),
        },
    );

    assert_eq!(*clicks.borrow(), 0);
    assert_eq!(
        *actions.borrow(),
        vec![("delete".to_string(), "Bob".to_string())]
    );
}
