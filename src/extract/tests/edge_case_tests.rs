use scraper::Html;

use crate::extract::{basic, directors, financial, pdf_links, publications};
use crate::records::Directors;

const BASE: &str = "https://staatsbladmonitor.be";

#[test]
fn test_basic_info_single_row_table() {
    let html = r#"<html><body>
        <table><tr><td>Vennootschapsnaam</td><td>Acme NV</td></tr></table>
        </body></html>"#;
    let doc = Html::parse_document(html);
    let info = basic::extract(&doc).unwrap();

    assert_eq!(info.get("company_name").unwrap(), "Acme NV");
}

#[test]
fn test_basic_info_last_row_wins_on_duplicate_labels() {
    let html = r#"<html><body><table>
        <tr><td>Status</td><td>Actief</td></tr>
        <tr><td>Status</td><td>Stopgezet</td></tr>
        </table></body></html>"#;
    let doc = Html::parse_document(html);
    let info = basic::extract(&doc).unwrap();

    assert_eq!(info.get("status").unwrap(), "Stopgezet");
}

#[test]
fn test_basic_info_empty_page_yields_empty_map() {
    let doc = Html::parse_document("<html><body><p>niets</p></body></html>");
    let info = basic::extract(&doc).unwrap();
    // No headings, title element, tables, or address tokens
    assert!(info.is_empty());
}

#[test]
fn test_financial_row_with_six_cells_defaults_debts_empty() {
    let html = r#"<html><body><table>
        <tr><th>Jaareinde</th><th>Activa</th><th>Brutomarge</th><th>Bedrijfswinst</th><th>Belastingen</th></tr>
        <tr><td>2023-12-31</td><td>1000</td><td>200</td><td>50</td><td>10</td><td>500</td></tr>
        </table></body></html>"#;
    let doc = Html::parse_document(html);
    let years = financial::extract(&doc).unwrap();

    assert_eq!(years.len(), 1);
    assert_eq!(years[0].year_end, "2023-12-31");
    assert_eq!(years[0].equity, "500");
    assert_eq!(years[0].debts, "");
}

#[test]
fn test_financial_row_with_five_cells_is_dropped() {
    let html = r#"<html><body><table>
        <tr><th>Activa</th></tr>
        <tr><td>2023-12-31</td><td>1000</td><td>200</td><td>50</td><td>10</td></tr>
        </table></body></html>"#;
    let doc = Html::parse_document(html);
    let years = financial::extract(&doc).unwrap();

    assert!(years.is_empty());
}

#[test]
fn test_financial_detection_is_case_insensitive() {
    let html = r#"<html><body><table>
        <tr><th>EIGEN VERMOGEN</th></tr>
        <tr><td>2022</td><td>1</td><td>2</td><td>3</td><td>4</td><td>5</td><td>6</td></tr>
        </table></body></html>"#;
    let doc = Html::parse_document(html);
    let years = financial::extract(&doc).unwrap();

    assert_eq!(years.len(), 1);
    assert_eq!(years[0].debts, "6");
}

#[test]
fn test_non_financial_table_is_ignored() {
    let html = r#"<html><body><table>
        <tr><th>Kolom</th></tr>
        <tr><td>a</td><td>b</td><td>c</td><td>d</td><td>e</td><td>f</td></tr>
        </table></body></html>"#;
    let doc = Html::parse_document(html);
    let years = financial::extract(&doc).unwrap();

    assert!(years.is_empty());
}

#[test]
fn test_publications_entry_without_leading_date_is_dropped() {
    let html = r#"<html><body><div>
        <h2>Publicaties Belgisch Staatsblad</h2>
        <ul>
            <li>Gepubliceerd op 03-07-2023 Oprichting</li>
            <li>03-07-2023 Oprichting</li>
        </ul>
        </div></body></html>"#;
    let doc = Html::parse_document(html);
    let publications = publications::extract(&doc).unwrap();

    // Only the entry that starts with the date survives
    assert_eq!(publications.len(), 1);
    assert_eq!(publications[0].date, "03-07-2023");
    assert_eq!(publications[0].kind, "Oprichting");
}

#[test]
fn test_publications_without_marker_yield_nothing() {
    let html = r#"<html><body><ul><li>03-07-2023 Oprichting</li></ul></body></html>"#;
    let doc = Html::parse_document(html);
    let publications = publications::extract(&doc).unwrap();

    assert!(publications.is_empty());
}

#[test]
fn test_directors_without_marker_defaults_to_unavailable() {
    let doc = Html::parse_document("<html><body><p>geen sectie</p></body></html>");
    let directors = directors::extract(&doc).unwrap();

    assert_eq!(directors, Directors::unavailable());
}

#[test]
fn test_directors_listed_openly() {
    // The marker text sits directly in the container, so the name list is
    // inside the marker's parent subtree
    let html = r#"<html><body><div>
        Bestuurders
        <ul><li>Jan Peeters</li><li>Marie Claes</li></ul>
        </div></body></html>"#;
    let doc = Html::parse_document(html);
    let directors = directors::extract(&doc).unwrap();

    match directors {
        Directors::Available { names } => {
            assert_eq!(names, vec!["Jan Peeters", "Marie Claes"]);
        }
        Directors::Unavailable { .. } => panic!("directors should be available"),
    }
}

#[test]
fn test_directors_registration_notice_wins_over_rows() {
    let html = r#"<html><body><div>
        Bestuurders
        <p>Enkel toegankelijk voor geregistreerde gebruikers</p>
        <ul><li>verborgen</li></ul>
        </div></body></html>"#;
    let doc = Html::parse_document(html);
    let directors = directors::extract(&doc).unwrap();

    assert_eq!(directors, Directors::unavailable());
}

#[test]
fn test_directors_marker_in_bare_heading_defaults_to_unavailable() {
    // When the marker is the heading's own text, the heading subtree has
    // no rows, so the section degrades to unavailable
    let html = r#"<html><body>
        <h2>Bestuurders</h2>
        <ul><li>Jan Peeters</li></ul>
        </body></html>"#;
    let doc = Html::parse_document(html);
    let directors = directors::extract(&doc).unwrap();

    assert_eq!(directors, Directors::unavailable());
}

#[test]
fn test_directors_empty_section_defaults_to_unavailable() {
    let html = r#"<html><body><div><h2>Bestuurders</h2></div></body></html>"#;
    let doc = Html::parse_document(html);
    let directors = directors::extract(&doc).unwrap();

    assert_eq!(directors, Directors::unavailable());
}

#[test]
fn test_pdf_dedup_prefers_first_occurrence() {
    let html = r#"<html><body>
        <a href="https://staatsbladmonitor.be/docs/verslag.pdf">Verslag 2023</a>
        <p>Zie ook https://staatsbladmonitor.be/docs/verslag.pdf</p>
        </body></html>"#;
    let doc = Html::parse_document(html);
    let links = pdf_links::extract(&doc, BASE).unwrap();

    assert_eq!(links.len(), 1);
    // The anchor's own title wins over the synthesized one
    assert_eq!(links[0].title, "Verslag 2023");
}

#[test]
fn test_bare_text_pdf_url_gets_synthesized_title() {
    let html = r#"<html><body>
        <p>Download: https://staatsbladmonitor.be/docs/akte.pdf</p>
        </body></html>"#;
    let doc = Html::parse_document(html);
    let links = pdf_links::extract(&doc, BASE).unwrap();

    assert_eq!(links.len(), 1);
    assert_eq!(links[0].title, "PDF Document - akte.pdf");
    assert_eq!(links[0].filename, "akte.pdf");
}

#[test]
fn test_non_pdf_anchors_are_ignored() {
    let html = r#"<html><body><a href="/contact.html">Contact</a></body></html>"#;
    let doc = Html::parse_document(html);
    let links = pdf_links::extract(&doc, BASE).unwrap();

    assert!(links.is_empty());
}
