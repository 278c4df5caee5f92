use super::*;

fn page(body: &str) -> String {
    format!("<!DOCTYPE html><html><head><title>Registre VTC</title></head><body>{body}</body></html>")
}

#[test]
fn value_is_read_from_parent_text() {
    let html = page(r#"<div><label class="cLabel">Numéro SIREN</label> 123456789 </div>"#);
    let map = extract_label_map(&html).expect("extract");
    assert_eq!(map.get("Numéro SIREN"), "123456789");
    assert_eq!(map.len(), 1);
}

#[test]
fn span_wrapped_label_reads_grandparent() {
    let html = page(
        r#"<table><tbody><tr><td>
            <span><label class="cLabel">Ville</label> ignored span text</span>
            PARIS
        </td></tr></tbody></table>"#,
    );
    let map = extract_label_map(&html).expect("extract");
    assert_eq!(map.get("Ville"), "PARIS");
}

#[test]
fn span_grandparent_text_before_the_span_wins() {
    let html = page(r#"<p>LYON<span><label class="cLabel">Ville</label></span>PARIS</p>"#);
    let map = extract_label_map(&html).expect("extract");
    assert_eq!(map.get("Ville"), "LYON");
}

#[test]
fn nested_element_text_is_not_recursed_into() {
    let html = page(
        r#"<div><label class="cLabel">Sigle</label><strong>NESTED</strong> DIRECT </div>"#,
    );
    let map = extract_label_map(&html).expect("extract");
    assert_eq!(map.get("Sigle"), "DIRECT");
}

#[test]
fn value_is_empty_when_parent_has_only_nested_text() {
    let html = page(r#"<div><label class="cLabel">Sigle</label><em>NESTED</em></div>"#);
    let map = extract_label_map(&html).expect("extract");
    assert_eq!(map.get("Sigle"), "");
    assert_eq!(map.len(), 1);
}

#[test]
fn label_text_is_trimmed() {
    let html = page("<div><label class=\"cLabel\">\n   Code Postal\n  </label>\n 75011\n</div>");
    let map = extract_label_map(&html).expect("extract");
    assert_eq!(map.get("Code Postal"), "75011");
}

#[test]
fn html_entities_are_decoded_in_labels() {
    let html = page(r#"<div><label class="cLabel">Nom d&#39;usage</label>Dupont</div>"#);
    let map = extract_label_map(&html).expect("extract");
    assert_eq!(map.get("Nom d'usage"), "Dupont");
}

#[test]
fn duplicate_labels_keep_the_last_value() {
    let html = page(
        r#"<div><label class="cLabel">Nom</label>FIRST</div>
           <div><label class="cLabel">Nom</label>SECOND</div>"#,
    );
    let map = extract_label_map(&html).expect("extract");
    assert_eq!(map.get("Nom"), "SECOND");
    assert_eq!(map.len(), 1);
}

#[test]
fn elements_without_the_label_class_are_ignored() {
    let html = page(r#"<div><label class="other">Numéro SIREN</label>123456789</div>"#);
    let map = extract_label_map(&html).expect("extract");
    assert!(map.is_empty());
}

#[test]
fn page_without_labels_yields_empty_map() {
    let html = page("<p>Aucun résultat ne correspond à votre recherche.</p>");
    let map = extract_label_map(&html).expect("extract");
    assert!(map.is_empty());
    assert_eq!(map.get("Numéro SIREN"), "");
}

#[test]
fn malformed_markup_is_tolerated() {
    let html = r#"<div><label class="cLabel">Pays</label>FRANCE<div><label class="cLabel">Ville"#;
    let map = extract_label_map(html).expect("extract");
    assert_eq!(map.get("Pays"), "FRANCE");
}

#[test]
fn label_map_from_iterator_overwrites_duplicates() {
    let map: LabelValueMap = [("Nom", "A"), ("Nom", "B"), ("Ville", "PARIS")]
        .into_iter()
        .collect();
    assert_eq!(map.get("Nom"), "B");
    assert_eq!(map.get("Ville"), "PARIS");
    assert_eq!(map.get("Pays"), "");
}
