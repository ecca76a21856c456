use tracing_subscriber::EnvFilter;

/// ログ出力を初期化（標準エラーへ出力）
///
/// `RUST_LOG` があればそれを優先し、なければ `--verbose` で debug に上げる。
pub fn init(verbose: bool) {
    let default_directive = if verbose {
        "warn,anisong_lookup=debug,anisong_common=debug"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    // 二重初期化（テスト等）は無視
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
