fn main() {
    #[cfg(feature = "cli")]
    binembed::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("binembed: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(1);
    }
}
