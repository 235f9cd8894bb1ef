//! Progress reporting: a count-style bar for files loaded out of total.

use indicatif::{ProgressBar, ProgressStyle};

/// Count-style progress bar (files processed out of total) with a label.
///
/// Draws to stderr and indicatif hides it when stderr is not a terminal, so
/// redirected or scripted runs stay clean without a switch.
pub fn make_count_progress(total: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::with_template(
        "{spinner:.green} {msg} {pos}/{len} files [{bar:.cyan/blue}] {percent:>3}%  \
         elapsed: {elapsed_precise}  eta: {eta_precise}",
    )
    .unwrap()
    .progress_chars("█▉▊▋▌▍▎▏  ");
    pb.set_style(style);
    if !label.is_empty() {
        pb.set_message(label.to_string());
    }
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}
