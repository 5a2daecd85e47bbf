fn main() {
    adstore_client::launch();
}
