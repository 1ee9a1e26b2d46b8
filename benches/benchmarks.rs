#[macro_use]
extern crate criterion;
extern crate fast_autocomplete;
extern crate rand;

use std::collections::HashMap;

use criterion::{black_box, Criterion};
use fast_autocomplete::{AttributeValue, AutoComplete, EngineConfig, MapRecord, NormalizerConfig, WordRecord};
use rand::Rng;

const MAKES: &[&str] = &[
    "acura", "alfa romeo", "aston martin", "audi", "bentley", "bmw", "bmw 1 series", "bmw e28",
    "bmw e30", "buick", "cadillac", "camry", "chevrolet", "chrysler", "dodge", "dyna", "ferrari",
    "fiat", "ford", "genesis", "gmc", "honda", "hyundai", "infiniti", "jaguar", "jeep", "kia",
    "lamborghini", "land rover", "lexus", "lincoln", "lotus", "maserati", "mazda", "mclaren",
    "mercedes benz", "mini", "mitsubishi", "nissan", "porsche", "ram", "rolls royce", "saab",
    "subaru", "tesla", "toyota", "toyota camry", "volkswagen", "volkswagen beetle", "volvo",
];

fn build_engine() -> AutoComplete {
    let words: HashMap<String, Box<dyn WordRecord>> = MAKES
        .iter()
        .map(|make| {
            let record: Box<dyn WordRecord> =
                Box::new(MapRecord::new().set_field("display", AttributeValue::Str(make.to_string())));
            (make.to_string(), record)
        })
        .collect();

    let mut synonyms = HashMap::new();
    synonyms.insert("bmw".to_string(), vec!["beemer".to_string()]);
    synonyms.insert("alfa romeo".to_string(), vec!["alfa".to_string()]);
    synonyms.insert("volkswagen".to_string(), vec!["vw".to_string()]);

    AutoComplete::new(words, Some(synonyms), None, NormalizerConfig::default(), EngineConfig::default()).unwrap()
}

fn search_benchmark(c: &mut Criterion) {
    let engine = build_engine();
    c.bench_function("search exact prefix", |b| {
        b.iter(|| black_box(engine.search("bmw", 2, 5)))
    });
    c.bench_function("search short fuzzy prefix", |b| {
        b.iter(|| black_box(engine.search("toyot", 2, 5)))
    });
    c.bench_function("search random short query", |b| {
        let mut rng = rand::thread_rng();
        b.iter(|| {
            let make = MAKES[rng.gen_range(0, MAKES.len())];
            let cut = make.len().min(4);
            black_box(engine.search(&make[..cut], 2, 5))
        })
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default();
    targets = search_benchmark
}
criterion_main!(benches);
