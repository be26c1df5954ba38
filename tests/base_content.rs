use basecontent::export::{write_report, OutputFormat};
use basecontent::input::Column;
use basecontent::{
    base_sequence_content, ContentAnalyzer, ContentError, ContentOptions, ContentTable, Frame,
    SequenceSource, Symbol,
};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write fixture");
    path
}

fn fastq(reads: &[&str]) -> String {
    reads
        .iter()
        .enumerate()
        .map(|(i, read)| format!("@read{}\n{}\n+\n{}\n", i, read, "I".repeat(read.len())))
        .collect()
}

fn counts(table: &ContentTable, position: usize) -> Vec<u64> {
    Symbol::ALL
        .iter()
        .map(|&symbol| table.count(position, symbol).unwrap_or(0))
        .collect()
}

/// Deterministic pseudo-random reads of varying length.
fn generated_reads(n: usize) -> Vec<String> {
    const ALPHABET: &[u8] = b"ACGTNacgtnXR-";
    let mut state: u64 = 0x2545_f491_4f6c_dd1d;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    (0..n)
        .map(|_| {
            let len = (next() % 150) as usize + 1;
            (0..len)
                .map(|_| ALPHABET[(next() % ALPHABET.len() as u64) as usize] as char)
                .collect()
        })
        .collect()
}

fn analyze_path(path: &Path, options: ContentOptions) -> ContentTable {
    base_sequence_content(path, &options).expect("base content")
}

#[test]
fn fastq_equal_length_reads() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "reads.fastq", &fastq(&["ATGC", "AAGC"]));

    let table = analyze_path(&path, ContentOptions::default());

    assert_eq!(table.len(), 4);
    //                              A  C  G  T  N  other
    assert_eq!(counts(&table, 0), [2, 0, 0, 0, 0, 0]);
    assert_eq!(counts(&table, 1), [1, 0, 0, 1, 0, 0]);
    assert_eq!(counts(&table, 2), [0, 0, 2, 0, 0, 0]);
    assert_eq!(counts(&table, 3), [0, 2, 0, 0, 0, 0]);
}

#[test]
fn fasta_ragged_reads_are_not_padded() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "reads.fa", ">r1\nAT\n>r2\nAAGC\n");

    let table = analyze_path(&path, ContentOptions::default().with_total(true));

    assert_eq!(table.len(), 4);
    assert_eq!(table.total(0), Some(2));
    assert_eq!(table.total(1), Some(2));
    assert_eq!(table.total(2), Some(1));
    assert_eq!(table.total(3), Some(1));
}

#[test]
fn unknown_symbols_are_other_not_n() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "reads.fq", &fastq(&["ATXC"]));

    let table = analyze_path(&path, ContentOptions::default());

    assert_eq!(table.count(2, Symbol::Other), Some(1));
    assert_eq!(table.count(2, Symbol::N), Some(0));
    assert_eq!(table.total(2), Some(1));
}

#[test]
fn delimited_files_read_the_sequence_column() {
    let dir = TempDir::new().unwrap();
    let csv = write_fixture(&dir, "reads.csv", "id,sequence,score\nr1,ATGC,1\nr2,,2\nr3,aagc,3\n");
    let tsv = write_fixture(&dir, "reads.tsv", "sequence\tid\nATGC\tr1\n\tr2\nAAGC\tr3\n");

    let from_csv = ContentAnalyzer::new(ContentOptions::default())
        .analyze(csv.as_path())
        .unwrap();
    let from_tsv = analyze_path(&tsv, ContentOptions::default());

    assert_eq!(from_csv.table, from_tsv);
    assert_eq!(counts(&from_tsv, 0), [2, 0, 0, 0, 0, 0]);
    assert_eq!(from_csv.stats.processed, 3);
    assert_eq!(from_csv.stats.empty, 1);
}

#[test]
fn every_source_variant_gives_the_same_table() {
    let reads = ["ACGTN", "ACG", "TTX", "gattaca"];
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "reads.fastq", &fastq(&reads));
    let options = ContentOptions::default().with_total(true);

    let from_path = analyze_path(&path, options.clone());
    let frame = Frame::new().with_column("sequence", Column::text(reads));
    let from_frame = base_sequence_content(frame, &options).unwrap();

    assert_eq!(from_path, from_frame);
    assert_eq!(from_path.len(), 7);
}

#[test]
fn parallel_run_matches_single_thread() {
    let reads = generated_reads(2_000);
    let refs: Vec<&str> = reads.iter().map(String::as_str).collect();
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "reads.fastq", &fastq(&refs));

    let single = ContentAnalyzer::new(ContentOptions::default().with_threads(1))
        .analyze(path.as_path())
        .unwrap();
    let parallel = ContentAnalyzer::new(
        ContentOptions::default()
            .with_threads(4)
            .with_batch_size(37),
    )
    .analyze(path.as_path())
    .unwrap();

    assert_eq!(single.table, parallel.table);
    assert_eq!(single.stats.processed, 2_000);
    assert_eq!(parallel.stats.processed, 2_000);
    assert!(parallel.stats.batches > single.stats.batches);

    let longest = reads.iter().map(String::len).max().unwrap();
    assert_eq!(parallel.table.len(), longest);
    let covering_first = parallel.table.total(0);
    assert_eq!(covering_first, Some(2_000));
}

#[test]
fn requested_symbols_shape_the_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "reads.fastq", &fastq(&["ATGC", "AAGC"]));
    let options = ContentOptions::default()
        .with_symbols([Symbol::A, Symbol::C, Symbol::G, Symbol::T, Symbol::N])
        .with_proportions(true);

    let table = analyze_path(&path, options);

    assert_eq!(
        table.column_names(),
        vec![
            "position",
            "a_count",
            "c_count",
            "g_count",
            "t_count",
            "n_count",
            "a_fraction",
            "c_fraction",
            "g_fraction",
            "t_fraction",
            "n_fraction",
        ]
    );
    assert_eq!(table.fraction(1, Symbol::T), Some(0.5));
}

#[test]
fn missing_path_is_source_not_found() {
    let dir = TempDir::new().unwrap();
    let err = base_sequence_content(dir.path().join("absent.fastq"), &ContentOptions::default())
        .unwrap_err();
    assert!(matches!(err, ContentError::SourceNotFound(_)));

    let err = base_sequence_content(dir.path(), &ContentOptions::default()).unwrap_err();
    assert!(matches!(err, ContentError::SourceNotFound(_)));
}

#[test]
fn unrecognized_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "reads.parquet", "PAR1 not really parquet");

    let err = base_sequence_content(path, &ContentOptions::default()).unwrap_err();
    assert!(matches!(err, ContentError::UnsupportedFileKind(_)));
}

#[test]
fn csv_without_sequence_column_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "reads.csv", "id,read\nr1,ACGT\n");

    let err = base_sequence_content(path, &ContentOptions::default()).unwrap_err();
    assert!(matches!(err, ContentError::MissingColumn { ref column } if column == "sequence"));
}

#[test]
fn integer_sequence_column_is_rejected() {
    let frame = Frame::new().with_column("sequence", Column::Int(vec![Some(1), Some(2)]));
    let err = base_sequence_content(SequenceSource::Frame(frame), &ContentOptions::default())
        .unwrap_err();
    assert!(matches!(err, ContentError::UnsupportedInputType(_)));
}

#[test]
fn malformed_fastq_surfaces_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "broken.fastq", "ACGTACGT\n+\nIIIIIIII\n");

    let err = base_sequence_content(path, &ContentOptions::default()).unwrap_err();
    assert!(matches!(err, ContentError::Parse { format: "FASTQ", .. }));
}

#[test]
fn json_report_wraps_the_table() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "reads.fastq", &fastq(&["ATGC", "AAGC"]));
    let report = ContentAnalyzer::new(ContentOptions::default().with_total(true))
        .analyze(path.as_path())
        .unwrap();

    let mut out = Vec::new();
    write_report(&report, "reads.fastq", OutputFormat::Json, &mut out).unwrap();
    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();

    assert_eq!(json["$type"], "basecontent.report");
    assert_eq!(json["source"], "reads.fastq");
    assert_eq!(json["statistics"]["sequences_processed"], 2);
    assert_eq!(json["statistics"]["empty_sequences"], 0);
    assert_eq!(json["statistics"]["max_length"], 4);
    assert_eq!(json["columns"][0], "position");
    assert_eq!(json["columns"][7], "total");
    assert_eq!(json["positions"].as_array().map(Vec::len), Some(4));
    assert_eq!(json["positions"][0]["a_count"], 2);
    assert_eq!(json["positions"][3]["total"], 2);
}

#[test]
fn tsv_report_is_the_plain_table() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "reads.fastq", &fastq(&["AC", "AG"]));
    let options = ContentOptions::default().with_symbols([Symbol::A, Symbol::C]);
    let report = ContentAnalyzer::new(options).analyze(path.as_path()).unwrap();

    let mut out = Vec::new();
    write_report(&report, "reads.fastq", OutputFormat::Tsv, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "position\ta_count\tc_count\n0\t2\t0\n1\t0\t1\n"
    );
}

#[test]
fn empty_fastq_gives_empty_table() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "empty.fastq", "");

    let report = ContentAnalyzer::new(ContentOptions::default())
        .analyze(path.as_path())
        .unwrap();

    assert!(report.table.is_empty());
    assert_eq!(report.stats.processed, 0);
}

#[test]
fn fasta_shorter_than_a_compression_magic_is_read() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "tiny.fa", ">r\nA");

    let table = analyze_path(&path, ContentOptions::default().with_total(true));

    assert_eq!(table.len(), 1);
    assert_eq!(table.count(0, Symbol::A), Some(1));
    assert_eq!(table.total(0), Some(1));
}

#[test]
fn empty_csv_has_no_sequence_column() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "empty.csv", "");

    let err = base_sequence_content(path, &ContentOptions::default()).unwrap_err();
    assert!(matches!(err, ContentError::MissingColumn { .. }));
}
