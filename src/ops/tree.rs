//! Dependency tree rendering for `ctext tree`.

use std::collections::HashSet;

use crate::core::{BuildTarget, Package};

/// Render the package's targets and what they link against.
///
/// Targets already printed are marked `(*)` and not expanded again.
pub fn render(package: &Package, max_depth: Option<usize>) -> String {
    let mut out = format!("{} ({})\n", package.name(), package.path());
    let mut seen = HashSet::new();
    let max_depth = max_depth.unwrap_or(usize::MAX);

    let targets = package.targets();
    let count = targets.len();
    for (i, target) in targets.into_iter().enumerate() {
        let last = i + 1 == count;
        render_target(&mut out, target, "", last, 1, max_depth, &mut seen);
    }
    out
}

fn render_target<'a>(
    out: &mut String,
    target: &'a BuildTarget,
    prefix: &str,
    last: bool,
    depth: usize,
    max_depth: usize,
    seen: &mut HashSet<&'a str>,
) {
    if depth > max_depth {
        return;
    }

    let is_duplicate = !seen.insert(target.name());
    let branch = if last { "└── " } else { "├── " };
    let dup_marker = if is_duplicate { " (*)" } else { "" };

    out.push_str(&format!(
        "{}{}{} [{}]{}\n",
        prefix,
        branch,
        target.name(),
        target.kind(),
        dup_marker
    ));

    if is_duplicate {
        return;
    }

    let child_prefix = format!("{}{}", prefix, if last { "    " } else { "│   " });
    let deps = target.dependencies();
    for (i, dep) in deps.iter().enumerate() {
        render_target(
            out,
            dep,
            &child_prefix,
            i + 1 == deps.len(),
            depth + 1,
            max_depth,
            seen,
        );
    }
}
