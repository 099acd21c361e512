use criterion::{criterion_group, criterion_main, Criterion};

use urlnorm::normalize::{Rules, StripFragmentRule};
use urlnorm::Url;

pub fn criterion_benchmark(c: &mut Criterion) {
    let domain = Url::new("http://www.sub.example.com:80/a//b/./c/../index.php?z=1&a[]=2#x");
    let idn = Url::new("http://www.ãéô.com:80/páth/?q=a b");
    let v6 = Url::new("http://[2001:db8:0:0:0:0:0:cafe]:80/a/b/");

    let safe = Rules::safe();
    let basic = Rules::basic_and([StripFragmentRule]);

    for (name, url) in [("domain", &domain), ("idn", &idn), ("ipv6", &v6)] {
        c.bench_function(&format!("normalize safe ({name})"), |b| {
            b.iter(|| safe.apply(url).expect("should normalize"))
        });
        c.bench_function(&format!("normalize basic ({name})"), |b| {
            b.iter(|| basic.apply(url).expect("should normalize"))
        });
    }

    c.bench_function("parse", |b| b.iter(|| domain.parse().to_components()));
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
