use buildrules_core::{BuildTarget, Glob};

pub fn format_glob(glob: &Glob) -> String {
    if glob.excludes.is_empty() {
        format!("glob({})", glob.patterns.join(", "))
    } else {
        format!(
            "glob({}; exclude {})",
            glob.patterns.join(", "),
            glob.excludes.join(", ")
        )
    }
}

pub fn print_targets(targets: &[BuildTarget]) {
    if targets.is_empty() {
        println!("   (no targets)");
        return;
    }

    for target in targets {
        println!("🎯 {}", target.target);

        if !target.sources.files.is_empty() {
            println!("   📄 Files: {}", target.sources.files.join(", "));
        }
        for glob in &target.sources.globs {
            println!("   🔍 {}", format_glob(glob));
        }
        if let Some(base_module) = &target.base_module {
            println!("   🐍 Base module: {}", base_module);
        }
        if !target.dependencies.is_empty() {
            println!("   🔗 Deps:");
            for dependency in &target.dependencies {
                println!("      • {}", dependency);
            }
        }
    }
}
