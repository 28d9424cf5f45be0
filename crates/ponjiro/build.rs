use vergen_gitcl::{BuildBuilder, Emitter, GitclBuilder};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let build = BuildBuilder::default().build_date(true).build()?;
    let gitcl = GitclBuilder::default().sha(true).build()?;

    let emitted = Emitter::default()
        .add_instructions(&build)?
        .add_instructions(&gitcl)?
        .emit();

    // Actions のチェックアウトでは git が使えないことがあるので GITHUB_SHA を見る
    if emitted.is_err() {
        println!("cargo::rustc-env=VERGEN_BUILD_DATE=unknown");
        let sha = std::env::var("GITHUB_SHA")
            .map(|sha| sha.chars().take(7).collect::<String>())
            .unwrap_or_else(|_| "unknown".to_string());
        println!("cargo::rustc-env=VERGEN_GIT_SHA={sha}");
    }

    Ok(())
}
