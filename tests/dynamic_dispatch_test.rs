use assembly_payload::infrastructure::in_memory::InMemoryFileSystem;
use assembly_payload::infrastructure::local_fs::LocalFileSystem;
use assembly_payload::{AssemblyBuilder, BuilderConfig, FileProbe, FileProbeBox};
use std::path::Path;

#[test]
fn test_probes_as_trait_objects() {
    let probes: Vec<FileProbeBox> = vec![
        Box::new(InMemoryFileSystem::with_files(["Cargo.toml"])),
        Box::new(LocalFileSystem),
    ];

    // Both agree on a file that exists in the package root and one that does not.
    for probe in &probes {
        assert!(probe.is_openable(Path::new("Cargo.toml")));
        assert!(!probe.is_openable(Path::new("no-such-file.toml")));
    }
}

#[test]
fn test_in_memory_probe_drives_builder() {
    let probe = InMemoryFileSystem::new();
    let handle = probe.clone();
    let mut builder = AssemblyBuilder::with_probe(BuilderConfig::default(), Box::new(probe));

    assert!(builder.add_file_with_key("remote", "s3://bucket/clip.mp4").is_err());

    handle.insert("s3://bucket/clip.mp4");
    assert_eq!(
        builder
            .add_file_with_key("remote", "s3://bucket/clip.mp4")
            .unwrap(),
        "remote"
    );
}

#[test]
fn test_builder_is_send() {
    let mut builder = AssemblyBuilder::with_probe(
        BuilderConfig::default(),
        Box::new(InMemoryFileSystem::with_files(["clip.mp4"])),
    );
    builder.set_field("title", "Holiday").unwrap();

    // Move the builder to another thread and finish it there.
    let handle = std::thread::spawn(move || {
        builder.add_file("clip.mp4").unwrap();
        builder.build()
    });

    let payload = handle.join().unwrap();
    assert_eq!(payload.fields()["title"], "Holiday");
    assert!(payload.files().contains_key("file_0"));
}
