use super::*;

#[test]
fn mime_guess_covers_form_categories() {
    assert_eq!(guess_mime_type("quote.PDF"), "application/pdf");
    assert_eq!(guess_mime_type("photo.jpeg"), "image/jpeg");
    assert_eq!(guess_mime_type("deck.pptx"), "application/vnd.openxmlformats-officedocument.presentationml.presentation");
    assert_eq!(guess_mime_type("bundle.zip"), "application/zip");
}

#[test]
fn mime_guess_falls_back_to_octet_stream() {
    assert_eq!(guess_mime_type("Makefile"), "application/octet-stream");
    assert_eq!(guess_mime_type("data.bin"), "application/octet-stream");
}

#[test]
fn html_description_exposes_plain_text_and_clears() {
    let description = HtmlDescription::new("<p>Buy <b>two</b> chairs</p>".to_owned());
    assert_eq!(description.plain_text(), "Buy two chairs");
    description.clear();
    assert!(description.html().is_empty());
}

#[tokio::test]
async fn path_file_reads_bytes_from_disk() {
    let path = std::env::temp_dir().join(format!("reqdesk-files-test-{}.txt", std::process::id()));
    std::fs::write(&path, b"hello").expect("write");

    let file = PathFile::open(&path).expect("open");
    assert_eq!(file.size(), 5);
    assert_eq!(file.mime_type(), "text/plain");
    assert_eq!(file.read_bytes().await.expect("read"), b"hello");

    std::fs::remove_file(&path).expect("cleanup");
}

#[test]
fn path_file_open_missing_errors() {
    assert!(PathFile::open(Path::new("/definitely/not/here.pdf")).is_err());
}
