use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use storefront_cart::{
  evaluate, generate_cart_items, total_items, total_value, CartRow, MutationIntent, MutationRequest, Product,
};

// --- Helpers ---
fn catalog(size: usize) -> Vec<Product> {
  (0..size)
    .map(|i| {
      Product::new(
        format!("prod_{}", i),
        format!("Product {}", i),
        "Bench",
        (i % 500) as f64 + 0.99,
        (i % 6) as u8,
        "https://img.example/bench.png",
      )
    })
    .collect()
}

// Every third row references a product outside the catalog.
fn cart_rows(count: usize, catalog_size: usize) -> Vec<CartRow> {
  (0..count)
    .map(|i| {
      let id = if i % 3 == 2 {
        format!("missing_{}", i)
      } else {
        format!("prod_{}", (i * 7) % catalog_size)
      };
      CartRow::new(id, (i % 5) as u32 + 1)
    })
    .collect()
}

// --- Benchmark Functions ---

fn bench_catalog_join(c: &mut Criterion) {
  let mut group = c.benchmark_group("CatalogJoin");

  for catalog_size in [100usize, 1_000, 10_000].iter() {
    for row_count in [10usize, 100].iter() {
      let products = catalog(*catalog_size);
      let rows = cart_rows(*row_count, *catalog_size);
      group.throughput(Throughput::Elements(*row_count as u64));
      group.bench_with_input(
        BenchmarkId::new(format!("catalog_{}", catalog_size), row_count),
        &(rows, products),
        |b, (rows, products)| b.iter(|| generate_cart_items(black_box(rows), black_box(products))),
      );
    }
  }
  group.finish();
}

fn bench_pricing(c: &mut Criterion) {
  let mut group = c.benchmark_group("Pricing");

  for row_count in [10usize, 100, 1_000].iter() {
    let products = catalog(1_000);
    let items = generate_cart_items(&cart_rows(*row_count, 1_000), &products);
    group.throughput(Throughput::Elements(*row_count as u64));
    group.bench_with_input(BenchmarkId::new("total_value", row_count), &items, |b, items| {
      b.iter(|| total_value(black_box(items)))
    });
    group.bench_with_input(BenchmarkId::new("total_items", row_count), &items, |b, items| {
      b.iter(|| total_items(black_box(items)))
    });
  }
  group.finish();
}

fn bench_mutation_guard(c: &mut Criterion) {
  let products = catalog(1_000);
  let items = generate_cart_items(&cart_rows(100, 1_000), &products);

  c.bench_function("MutationGuard/add_new_item", |b| {
    b.iter(|| {
      evaluate(black_box(&MutationRequest {
        token: Some("bench-token"),
        items: &items,
        products: &products,
        product_id: "prod_999",
        qty: 1,
        intent: MutationIntent::AddToCart,
      }))
    })
  });
}

criterion_group!(benches, bench_catalog_join, bench_pricing, bench_mutation_guard);
criterion_main!(benches);
