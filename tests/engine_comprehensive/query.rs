//! Queries over the shared inventory

use crate::{init_tracing, inventory, inventory_schema, names};
use sift::{Dataset, Error, Filter, MatchMode, Query, RecordSchema, Schema, Sort};

fn run(query: sift::QueryBuilder) -> Vec<String> {
    init_tracing();
    let data = inventory();
    let query = query.build(data.schema()).expect("query must build");
    names(&data.select(&query).expect("query must run"))
}

#[test]
fn empty_query_keeps_input_order() {
    assert_eq!(
        run(Query::builder()),
        vec!["web-1", "web-2", "db-1", "cache-1", "batch-1"]
    );
}

#[test]
fn tag_filter_matches_any_set_element() {
    assert_eq!(
        run(Query::builder().filter(Filter::new("tags", ["EU"]))),
        vec!["web-1", "db-1", "batch-1"]
    );
}

#[test]
fn filters_are_anded() {
    let query = Query::builder()
        .filter(Filter::new("tags", ["prod"]))
        .filter(Filter::new("active", [true]));
    assert_eq!(run(query), vec!["web-1", "web-2"]);
}

#[test]
fn price_range_skips_unpriced_servers() {
    let query = Query::builder()
        .filter(Filter::new("price", [50.0]).match_by(MatchMode::LessThan))
        .sort(Sort::asc("price"));
    assert_eq!(run(query), vec!["web-1", "web-2"]);
}

#[test]
fn regex_on_names() {
    let query = Query::builder()
        .filter(Filter::new("name", [r"^(web|db)-\d$"]).match_by(MatchMode::Regex))
        .sort(Sort::desc("name"));
    assert_eq!(run(query), vec!["web-2", "web-1", "db-1"]);
}

#[test]
fn port_list_range() {
    let query = Query::builder()
        .filter(Filter::new("ports", [1024i64]).match_by(MatchMode::GreaterThan));
    assert_eq!(run(query), vec!["web-2", "db-1", "cache-1"]);
}

#[test]
fn multi_key_sort_with_absent_values_last() {
    let query = Query::builder()
        .sort(Sort::desc("cpus"))
        .sort(Sort::asc("price"));
    // batch-1 and web-2 tie on cpus; batch-1 has no price
    assert_eq!(
        run(query),
        vec!["db-1", "web-2", "batch-1", "cache-1", "web-1"]
    );
}

#[test]
fn absent_values_sort_last_ascending_too() {
    assert_eq!(
        run(Query::builder().sort(Sort::asc("active"))),
        vec!["db-1", "web-1", "web-2", "cache-1", "batch-1"]
    );
}

#[test]
fn sort_over_collection_is_rejected() {
    let err: Error = Query::builder()
        .sort(Sort::asc("tags"))
        .build(&inventory_schema())
        .unwrap_err()
        .into();
    assert!(err.is_unorderable());
}

#[test]
fn unknown_attribute_is_rejected() {
    let err: Error = Query::builder()
        .filter(Filter::new("region", ["eu"]))
        .build(&inventory_schema())
        .unwrap_err()
        .into();
    assert!(matches!(err, Error::UnknownAttribute(ref a) if a == "region"));
}

#[test]
fn select_leaves_dataset_untouched() {
    let data: Dataset = inventory();
    let query = Query::builder()
        .sort(Sort::asc("name"))
        .build(data.schema())
        .unwrap();
    let sorted = names(&data.select(&query).unwrap());
    assert_eq!(sorted[0], "batch-1");
    assert_eq!(names(data.records())[0], "web-1");
}

#[test]
fn queries_are_shareable_across_threads() {
    let data = std::sync::Arc::new(inventory());
    let query = std::sync::Arc::new(
        Query::builder()
            .filter(Filter::new("cpus", [4i64]).match_by(MatchMode::GreaterThanOrEqual))
            .build(data.schema())
            .unwrap(),
    );

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let data = std::sync::Arc::clone(&data);
            let query = std::sync::Arc::clone(&query);
            std::thread::spawn(move || data.select(&query).map(|r| r.len()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), 4);
    }
}

#[test]
fn closely_spaced_prices_sort_cleanly() {
    init_tracing();
    let schema = RecordSchema::new()
        .with("name", Schema::String)
        .with("price", Schema::Float);
    let mut data = Dataset::new(schema);
    for i in 0..200u64 {
        let price = ((i * 104_729) % 200) as f64 * 4e-7;
        data.insert_json(&serde_json::json!({"name": format!("h{i}"), "price": price}))
            .unwrap();
    }

    let query = Query::builder()
        .sort(Sort::asc("price"))
        .build(data.schema())
        .unwrap();
    let selected = data.select(&query).unwrap();
    let prices: Vec<f64> = selected.iter().filter_map(|r| r["price"].as_float()).collect();
    assert_eq!(prices.len(), 200);
    assert!(prices.windows(2).all(|w| w[0] <= w[1]));
}
