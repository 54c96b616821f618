//! CatalogQuery string construction tests.

use pokebinder::CatalogQuery;

#[test]
fn field_terms_are_quoted() {
    let q = CatalogQuery::new().field("name", "Mr. Mime").build();
    assert_eq!(q, r#"name:"Mr. Mime""#);
}

#[test]
fn terms_join_with_spaces() {
    let q = CatalogQuery::new()
        .field("name", "Pikachu")
        .field("set.id", "base1")
        .field("rarity", "Rare Holo")
        .build();
    assert_eq!(q, r#"name:"Pikachu" set.id:"base1" rarity:"Rare Holo""#);
}

#[test]
fn raw_terms_are_unquoted_for_wildcards() {
    let q = CatalogQuery::new().field_raw("name", "char*").build();
    assert_eq!(q, "name:char*");
}

#[test]
fn negated_terms_get_a_minus_prefix() {
    let q = CatalogQuery::new()
        .field("types", "Fire")
        .not_field("supertype", "Energy")
        .build();
    assert_eq!(q, r#"types:"Fire" -supertype:"Energy""#);
}

#[test]
fn range_terms_use_lucene_syntax() {
    let q = CatalogQuery::new().range("hp", "100", "*").build();
    assert_eq!(q, "hp:[100 TO *]");
}

#[test]
fn embedded_quotes_are_stripped() {
    let q = CatalogQuery::new().field("name", "say \"cheese\"").build();
    assert_eq!(q, r#"name:"say cheese""#);
}

#[test]
fn empty_query_builds_empty_string() {
    let q = CatalogQuery::new();
    assert!(q.is_empty());
    assert_eq!(q.build(), "");
}
