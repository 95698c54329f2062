// src/scrape/contacts.rs
//
// Staff contact extraction. Two markup shapes, tried in order:
//
//   1. Containers: <div class="teacher"> holding <p class="name">,
//      <p class="title"> and <a href="mailto:X">X</a> (link text == address).
//   2. Table rows: <tr> with exactly three <td>: name, title, mailto link.
//
// Shape 2 only runs when shape 1 produced nothing.

use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

use crate::contact::Record;
use crate::core::html::{child_elements, css, mailto_address, mailto_target, text_of};

static CONTAINER: LazyLock<Selector> = LazyLock::new(|| css("div.teacher"));
static NAME: LazyLock<Selector> = LazyLock::new(|| css("p.name"));
static TITLE: LazyLock<Selector> = LazyLock::new(|| css("p.title"));
static LINK: LazyLock<Selector> = LazyLock::new(|| css("a[href]"));
static ROW: LazyLock<Selector> = LazyLock::new(|| css("tr"));

const ROW_CELLS: usize = 3;

/// Which markup shape produced the records.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Containers,
    TableRows,
}

impl Shape {
    pub fn label(&self) -> &'static str {
        match self {
            Shape::Containers => "teacher blocks",
            Shape::TableRows => "table rows",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extraction {
    /// `None` when neither shape matched.
    pub shape: Option<Shape>,
    pub records: Vec<Record>,
}

impl Extraction {
    fn none() -> Self {
        Self { shape: None, records: Vec::new() }
    }
}

/// Records in document order; empty when the page has neither shape.
pub fn extract(markup: &str) -> Vec<Record> {
    extract_with_shape(markup).records
}

pub fn extract_with_shape(markup: &str) -> Extraction {
    let doc = Html::parse_document(markup);

    let records = extract_containers(&doc);
    if !records.is_empty() {
        logd!("Extract: {} record(s) from teacher blocks", records.len());
        return Extraction { shape: Some(Shape::Containers), records };
    }

    let records = extract_table_rows(&doc);
    if !records.is_empty() {
        logd!("Extract: {} record(s) from table rows", records.len());
        return Extraction { shape: Some(Shape::TableRows), records };
    }

    logd!("Extract: no contact markup found");
    Extraction::none()
}

/// Shape 1. A container missing any of the three parts yields nothing.
/// Parts inside a nested container belong to that container, not the outer one.
pub fn extract_containers(doc: &Html) -> Vec<Record> {
    doc.select(&CONTAINER).filter_map(container_record).collect()
}

/// Shape 2. Only rows of exactly three direct cells count.
pub fn extract_table_rows(doc: &Html) -> Vec<Record> {
    doc.select(&ROW).filter_map(row_record).collect()
}

/* ---------- helpers ---------- */

/// Closest enclosing container of `el`, excluding `el` itself.
fn owner(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    el.ancestors()
        .filter_map(ElementRef::wrap)
        .find(|a| CONTAINER.matches(a))
}

fn owned_by(el: ElementRef<'_>, block: ElementRef<'_>) -> bool {
    owner(el).is_some_and(|c| c.id() == block.id())
}

/// Descendants of `block` matching `sel` that no nested container claims.
fn own<'a, 'b>(
    block: ElementRef<'a>,
    sel: &'b Selector,
) -> impl Iterator<Item = ElementRef<'a>> {
    block.select(sel).filter(move |el| owned_by(*el, block))
}

fn container_record(block: ElementRef<'_>) -> Option<Record> {
    let name = own(block, &NAME).next()?;
    let title = own(block, &TITLE).next()?;
    let email = own(block, &LINK).find_map(self_referential_mailto)?;
    Some(Record::new(&text_of(name), &text_of(title), email))
}

/// The link's address, if the link shows its whole mailto target (query
/// included) as text.
fn self_referential_mailto(link: ElementRef<'_>) -> Option<&str> {
    let href = link.value().attr("href")?;
    let target = mailto_target(href)?;
    let shown = link.text().collect::<String>();
    if shown.trim() != target {
        return None;
    }
    mailto_address(href)
}

fn row_record(row: ElementRef<'_>) -> Option<Record> {
    let cells = child_elements(row, "td");
    if cells.len() != ROW_CELLS {
        return None;
    }
    let email = cells[2]
        .select(&LINK)
        .find_map(|a| a.value().attr("href").and_then(mailto_address))?;
    Some(Record::new(&text_of(cells[0]), &text_of(cells[1]), email))
}
