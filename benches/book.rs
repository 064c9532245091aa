use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::Rng;
use regex::Regex;
use std::hint::black_box;

use assistant_bot::prelude::{AddressBook, Phone, Record, handlers};

// Book with `n` records, each holding one random ten digit number.
fn make_book_with_n(n: usize) -> AddressBook {
    let mut rng = rand::thread_rng();
    let mut book = AddressBook::new();

    for i in 0..n {
        let digits: String = (0..10)
            .map(|_| char::from(b'0' + rng.gen_range(0..10)))
            .collect();
        let phone = Phone::new(&digits).expect("generated phone is ten digits");
        book.upsert(Record::with_phones(&format!("User{i}"), vec![phone]));
    }
    book
}

fn bench_add(c: &mut Criterion) {
    c.bench_function("add one contact to 20k book", |b| {
        b.iter_batched(
            || make_book_with_n(20_000),
            |mut book| {
                let args = vec!["Zoe".to_string(), "0888549952".to_string()];
                black_box(handlers::add_contact(&args, &mut book)).ok();
            },
            BatchSize::LargeInput,
        );
    });
}

fn bench_list(c: &mut Criterion) {
    let book = make_book_with_n(20_000);

    c.bench_function("list 20k contacts", |b| {
        b.iter(|| black_box(handlers::get_all_contacts(&book)))
    });
}

fn bench_search(c: &mut Criterion) {
    let book = make_book_with_n(20_000);
    let pattern = Regex::new("User1[0-9]{3}$").expect("valid pattern");

    c.bench_function("regex search 20k contacts", |b| {
        b.iter(|| black_box(book.search(&pattern).len()))
    });
}

criterion_group!(benches, bench_add, bench_list, bench_search);
criterion_main!(benches);
