use criterion::criterion_main;


criterion_main!(hash_message::benches);
