fn main() {
    #[cfg(feature = "csr")]
    keydesk::start();
}
