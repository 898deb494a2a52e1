fn main() {
    lpseq::cli::run();
}
