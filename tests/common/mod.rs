use std::fs::{self, File};
use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Write a CSV file from raw lines, each terminated with `\n`.
pub fn write_csv(path: &Path, lines: &[&str]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let mut f = File::create(path).unwrap();
    for line in lines {
        writeln!(&mut f, "{}", line).unwrap();
    }
}

/// Read a whole file into a string, exact bytes included.
pub fn read_string(path: &Path) -> String {
    let mut s = String::new();
    File::open(path).unwrap().read_to_string(&mut s).unwrap();
    s
}

/// Read a text file line-by-line into strings (skips empty lines).
pub fn read_lines(path: &Path) -> Vec<String> {
    let f = File::open(path).unwrap();
    let r = BufReader::new(f);
    r.lines().map(|l| l.unwrap()).filter(|s| !s.is_empty()).collect()
}

/// A clicks/users corpus rooted in a tempdir. The tempdir guard keeps the
/// files alive for the duration of the test.
pub struct Corpus {
    pub dir: TempDir,
    pub clicks_dir: PathBuf,
    pub users_dir: PathBuf,
    pub reports_dir: PathBuf,
}

/// Build a tiny **valid** corpus:
/// - clicks/ has 3 files, 6 click rows total, dates 2020-01-01..2020-01-03
///   (2 clicks each), with user 9 appearing in no user file.
/// - users/ has 2 files, 4 users: 1=LT, 2=lv (lowercase on purpose), 3=LT,
///   4=EE.
/// - reports/ is an empty, existing output directory.
///
/// With country "LT" the filtered report is clicks 1, 3, and 4 of the
/// concatenated click order (users 1 and 3).
pub fn make_corpus_basic() -> Corpus {
    let dir = tempfile::tempdir().unwrap();
    let clicks_dir = dir.path().join("clicks");
    let users_dir = dir.path().join("users");
    let reports_dir = dir.path().join("reports");

    write_csv(
        &clicks_dir.join("clicks_1.csv"),
        &[
            "date,user_id,click_target",
            "2020-01-01,1,ad_banner",
            "2020-01-01,2,search_box",
        ],
    );
    write_csv(
        &clicks_dir.join("clicks_2.csv"),
        &[
            "date,user_id,click_target",
            "2020-01-02,1,ad_banner",
            "2020-01-02,3,promo_link",
            "2020-01-03,2,ad_banner",
        ],
    );
    write_csv(
        &clicks_dir.join("clicks_3.csv"),
        &["date,user_id,click_target", "2020-01-03,9,footer_link"],
    );

    write_csv(&users_dir.join("users_1.csv"), &["id,country", "1,LT", "2,lv"]);
    write_csv(&users_dir.join("users_2.csv"), &["id,country", "3,LT", "4,EE"]);

    fs::create_dir_all(&reports_dir).unwrap();

    Corpus { dir, clicks_dir, users_dir, reports_dir }
}
