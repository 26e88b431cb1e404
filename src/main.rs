fn main() {
    std::process::exit(topsis_ranker::cli::run(std::env::args_os()));
}
