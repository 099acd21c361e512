use criterion::{criterion_group, criterion_main, Criterion};

use urlnorm::resolve::Base;
use urlnorm::Url;

pub fn criterion_benchmark(c: &mut Criterion) {
    let base: Base = "https://sub.example.com/foo1/foo2/foo3/foo4/foo5"
        .parse()
        .expect("should be absolute");
    let rel = Url::new(concat!(
        "bar1/bar2/bar3/../bar4/../../bar5/bar6/bar7/../../../../..",
        "/bar8/../../../bar9/././././././bar10/bar11",
    ));

    c.bench_function("resolve", |b| {
        b.iter(|| base.to_absolute(&rel).expect("should resolve"))
    });

    c.bench_function("resolve (network-path reference)", |b| {
        let rel = Url::new("//other.example.com/a/b?c=d");
        b.iter(|| base.to_absolute(&rel).expect("should resolve"))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
