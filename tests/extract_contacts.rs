// tests/extract_contacts.rs
mod common;

use contact_scrape::contact::Record;
use contact_scrape::scrape::{self, Shape};

use common::{page, teacher_block};

#[test]
fn containers_round_trip() {
    let html = page(&[
        teacher_block("Dr. A", "Prof", "a@x.edu"),
        teacher_block("", "TA", "b@x.edu"),
    ].concat());

    assert_eq!(scrape::extract(&html), vec![
        Record::new("Dr. A", "Prof", "a@x.edu"),
        Record::new("N/A", "TA", "b@x.edu"),
    ]);
}

#[test]
fn single_table_row_fallback() {
    let html = page(r#"
        <table class="staff">
          <tr><td>C</td><td>Staff</td><td><a href="mailto:c@x.edu">c@x.edu</a></td></tr>
        </table>"#);

    let out = scrape::extract_with_shape(&html);
    assert_eq!(out.shape, Some(Shape::TableRows));
    assert_eq!(out.records, vec![Record::new("C", "Staff", "c@x.edu")]);
}

#[test]
fn fallback_never_runs_when_a_container_matches() {
    let table = r#"<table>
        <tr><td>T1</td><td>Staff</td><td><a href="mailto:t1@x.edu">t1@x.edu</a></td></tr>
        <tr><td>T2</td><td>Staff</td><td><a href="mailto:t2@x.edu">t2@x.edu</a></td></tr>
    </table>"#;

    // container before and after the table: table rows are ignored either way
    for html in [
        page(&format!("{}{table}", teacher_block("A", "Prof", "a@x.edu"))),
        page(&format!("{table}{}", teacher_block("A", "Prof", "a@x.edu"))),
    ] {
        let out = scrape::extract_with_shape(&html);
        assert_eq!(out.shape, Some(Shape::Containers));
        assert_eq!(out.records, vec![Record::new("A", "Prof", "a@x.edu")]);
    }
}

#[test]
fn unmatched_containers_let_fallback_run() {
    // container present but its link text differs from the address
    let html = page(r#"
        <div class="teacher"><p class="name">A</p><p class="title">Prof</p>
          <a href="mailto:a@x.edu">mail</a></div>
        <table><tr><td>C</td><td>Staff</td><td><a href="mailto:c@x.edu">c</a></td></tr></table>"#);

    assert_eq!(scrape::extract(&html), vec![Record::new("C", "Staff", "c@x.edu")]);
}

#[test]
fn no_produced_field_is_blank() {
    let html = page(&[
        teacher_block(" ", "", "a@x.edu"),
        teacher_block("\n\t", "Lecturer", "b@x.edu"),
        teacher_block("C", "&nbsp;", "c@x.edu"),
    ].concat());

    let records = scrape::extract(&html);
    assert_eq!(records.len(), 3);
    for r in &records {
        for cell in r.cells() {
            assert!(!cell.trim().is_empty(), "blank cell in {r:?}");
        }
    }
    assert_eq!(records[2].title(), "N/A");
}

#[test]
fn blank_table_cells_normalize() {
    let html = page(r#"<table>
        <tr><td> </td><td></td><td><a href="mailto:d@x.edu">d</a></td></tr>
    </table>"#);
    assert_eq!(scrape::extract(&html), vec![Record::new("N/A", "N/A", "d@x.edu")]);
}

#[test]
fn plain_page_yields_nothing() {
    let html = page("<h1>Department</h1><p>No staff listed.</p>");
    let out = scrape::extract_with_shape(&html);
    assert!(out.shape.is_none());
    assert!(out.records.is_empty());
}

#[test]
fn wrapped_container_is_not_duplicated() {
    let html = page(&format!(
        r#"<div class="teacher">{}</div>"#,
        teacher_block("I", "T", "i@x.edu")
    ));
    assert_eq!(scrape::extract(&html), vec![Record::new("I", "T", "i@x.edu")]);
}

#[test]
fn complete_outer_survives_malformed_nested_blocks() {
    let html = page(r#"
        <div class="teacher">
          <div class="teacher"><p class="name">Broken 1</p></div>
          <div class="teacher"><p class="title">Broken 2</p><a href="mailto:b@x.edu">b@x.edu</a></div>
          <p class="name">Outer</p>
          <p class="title">Dean</p>
          <a href="mailto:o@x.edu">o@x.edu</a>
        </div>"#);

    let out = scrape::extract_with_shape(&html);
    assert_eq!(out.shape, Some(Shape::Containers));
    assert_eq!(out.records, vec![Record::new("Outer", "Dean", "o@x.edu")]);
}

#[test]
fn container_link_with_query_does_not_match() {
    let html = page(r#"
        <div class="teacher"><p class="name">A</p><p class="title">Prof</p>
          <a href="mailto:a@x.edu?subject=Hi">a@x.edu</a></div>"#);
    assert!(scrape::extract(&html).is_empty());
}
