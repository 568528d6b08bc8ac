use criterion::{black_box, criterion_group, criterion_main, Criterion};
use dom::parse;
use serde_json::{json, Value};

/// A flat form with `count` labelled inputs.
fn form_description(count: usize) -> Value {
    let children: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "tag": "label",
                "attributes": { "for": format!("field-{i}") },
                "children": [
                    format!("Field {i}"),
                    { "tag": "input", "attributes": { "id": format!("field-{i}"), "type": "text" } },
                ],
            })
        })
        .collect();
    json!({ "root": { "tag": "form", "children": children } })
}

fn bench_parse(c: &mut Criterion) {
    let description = form_description(200);
    c.bench_function("parse_form_200", |b| {
        b.iter(|| parse::from_json(black_box(&description)).unwrap())
    });
}

fn bench_text_content(c: &mut Criterion) {
    let doc = parse::from_json(&form_description(200)).unwrap();
    let root = doc.root_id().unwrap();
    c.bench_function("text_content_form_200", |b| {
        b.iter(|| doc.text_content(black_box(root)).unwrap())
    });
}

criterion_group!(benches, bench_parse, bench_text_content);
criterion_main!(benches);
