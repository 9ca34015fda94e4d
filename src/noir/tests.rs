//! Tests for the nargo/bb toolchain wrappers
//!
//! The real binaries are replaced by shell scripts that follow the same
//! command-line contract. Everything runs inside a single test so no other
//! test thread forks while a script is still open for writing.

use super::*;
use crate::artifact::CircuitArtifact;
use crate::config::{ProofOptions, ProverConfig};
use crate::error::ProverError;
use crate::inputs::InputPair;
use crate::orchestrator::ProofOrchestrator;
use crate::abi;
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};

const FAKE_NARGO: &str = r#"
witness="$2"
while [ $# -gt 0 ]; do
  case "$1" in
    --program-dir) dir="$2"; shift ;;
    --prover-name) prover="$2"; shift ;;
  esac
  shift
done
guess=$(sed -n 's/^guess_hash = //p' "$dir/$prover.toml")
answer=$(sed -n 's/^answer_hash = //p' "$dir/$prover.toml")
if [ "$guess" != "$answer" ]; then
  echo "error: Failed constraint" >&2
  exit 1
fi
mkdir -p "$dir/target"
printf 'witness:%s' "$guess" > "$dir/target/$witness.gz"
"#;

fn fake_bb(log: &Path) -> String {
    format!(
        r#"
echo "$@ threads=$HARDWARE_CONCURRENCY" > "{log}"
while [ $# -gt 0 ]; do
  case "$1" in
    -b) circuit="$2"; shift ;;
    -w) witness="$2"; shift ;;
    -o) out="$2"; shift ;;
  esac
  shift
done
cp "$circuit" "{log}.circuit"
{{ printf 'proof:'; cat "$witness"; }} > "$out/proof"
"#,
        log = log.display()
    )
}

/// Writes the witness like the real tool, after rebuilding the circuit artifact
const RECOMPILING_NARGO: &str = r#"
witness="$2"
while [ $# -gt 0 ]; do
  case "$1" in
    --program-dir) dir="$2"; shift ;;
  esac
  shift
done
printf '{"bytecode":"RECOMPILED"}' > "$dir/target/zk_panagram.json"
printf 'witness' > "$dir/target/$witness.gz"
"#;

const EMPTY_BB: &str = r#"
while [ $# -gt 0 ]; do
  case "$1" in
    -o) out="$2"; shift ;;
  esac
  shift
done
: > "$out/proof"
"#;

const CRASHING_BB: &str = r#"
echo "bb: out of memory" >&2
exit 3
"#;

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Lays out `<root>/circuit/{Nargo.toml, target/zk_panagram.json}`
fn write_program(root: &Path) -> PathBuf {
    let program_dir = root.join("circuit");
    fs::create_dir_all(program_dir.join("target")).unwrap();
    fs::write(program_dir.join("Nargo.toml"), "[package]\nname = \"zk_panagram\"\ntype = \"bin\"\n").unwrap();

    let artifact_path = program_dir.join("target/zk_panagram.json");
    let artifact = json!({
        "noir_version": "1.0.0-beta.3",
        "abi": { "parameters": [ { "name": "guess_hash" }, { "name": "answer_hash" } ] },
        "bytecode": "H4sIAAAAAAAA/+1Y"
    });
    fs::write(&artifact_path, artifact.to_string()).unwrap();
    artifact_path
}

fn leftover_prover_files(program_dir: &Path) -> usize {
    fs::read_dir(program_dir)
        .unwrap()
        .filter_map(Result::ok)
        .filter(|e| e.file_name().to_string_lossy().starts_with("Prover-"))
        .count()
}

#[cfg(unix)]
#[tokio::test]
async fn test_fake_toolchain() {
    let root = tempfile::tempdir().unwrap();
    let tools = tempfile::tempdir().unwrap();
    let artifact_path = write_program(root.path());
    let program_dir = root.path().join("circuit");
    let artifact = CircuitArtifact::load(&artifact_path).unwrap();

    let nargo = write_script(tools.path(), "nargo", FAKE_NARGO);
    let bb_log = tools.path().join("bb.log");
    let bb = write_script(tools.path(), "bb", &fake_bb(&bb_log));
    let empty_bb = write_script(tools.path(), "empty-bb", EMPTY_BB);
    let crashing_bb = write_script(tools.path(), "crashing-bb", CRASHING_BB);
    let recompiling = write_script(tools.path(), "recompiling-nargo", RECOMPILING_NARGO);

    // Executor: satisfied inputs yield the witness, temp files are cleaned up
    let executor = NargoExecutor::new(&nargo, None);
    let witness = executor
        .execute(&artifact, &InputPair::new("0xaa", "0xaa"))
        .await
        .unwrap();
    assert_eq!(witness.as_bytes(), b"witness:\"0xaa\"");
    assert_eq!(leftover_prover_files(&program_dir), 0);
    assert_eq!(fs::read_dir(program_dir.join("target")).unwrap().count(), 1);

    // Executor: unsatisfied inputs surface the tool's stderr
    match executor
        .execute(&artifact, &InputPair::new("0x00", "0x01"))
        .await
    {
        Err(ProverError::Execution(msg)) => assert!(msg.contains("Failed constraint"), "{}", msg),
        other => panic!("expected execution error, got {:?}", other),
    }
    assert_eq!(leftover_prover_files(&program_dir), 0);

    // Executor: explicit program dir with the artifact kept outside its target dir
    let outside_dir = root.path().join("artifacts");
    fs::create_dir_all(&outside_dir).unwrap();
    let outside_path = outside_dir.join("zk_panagram.json");
    fs::copy(&artifact_path, &outside_path).unwrap();
    let outside = CircuitArtifact::load(&outside_path).unwrap();
    let explicit = NargoExecutor::new(&nargo, Some(program_dir.clone()));
    let witness = explicit
        .execute(&outside, &InputPair::new("1", "1"))
        .await
        .unwrap();
    assert_eq!(witness.as_bytes(), b"witness:\"1\"");
    assert_eq!(fs::read_dir(program_dir.join("target")).unwrap().count(), 1);

    // Executor: a missing binary
    let missing = NargoExecutor::new(tools.path().join("no-such-nargo"), None);
    assert!(matches!(
        missing.execute(&artifact, &InputPair::new("1", "1")).await,
        Err(ProverError::Execution(_))
    ));

    // Backend: keccak mode and single thread are forwarded
    let backend = BbBackend::new(&bb);
    let proof = backend
        .prove(&artifact, Witness::new(b"w1".to_vec()), &ProofOptions::default())
        .await
        .unwrap();
    assert_eq!(proof.as_bytes(), b"proof:w1");
    let logged = fs::read_to_string(&bb_log).unwrap();
    assert!(logged.starts_with("prove --scheme ultra_honk --oracle_hash keccak -b "), "{}", logged);
    assert!(logged.trim_end().ends_with("threads=1"), "{}", logged);
    let proved: CircuitArtifact =
        serde_json::from_str(&fs::read_to_string(tools.path().join("bb.log.circuit")).unwrap()).unwrap();
    assert_eq!(proved.bytecode, artifact.bytecode);

    let options = ProofOptions { threads: 4, keccak: false };
    backend
        .prove(&artifact, Witness::new(b"w2".to_vec()), &options)
        .await
        .unwrap();
    let logged = fs::read_to_string(&bb_log).unwrap();
    assert!(!logged.contains("keccak"), "{}", logged);
    assert!(logged.trim_end().ends_with("threads=4"), "{}", logged);

    // Backend: failures map to proving errors
    match BbBackend::new(&crashing_bb)
        .prove(&artifact, Witness::new(b"w".to_vec()), &ProofOptions::default())
        .await
    {
        Err(ProverError::Proving(msg)) => assert!(msg.contains("out of memory"), "{}", msg),
        other => panic!("expected proving error, got {:?}", other),
    }
    assert!(matches!(
        BbBackend::new(&empty_bb)
            .prove(&artifact, Witness::new(b"w".to_vec()), &ProofOptions::default())
            .await,
        Err(ProverError::Proving(_))
    ));

    // A recompiled circuit is rejected, and bb still proves the circuit loaded at startup
    let rebuilt_root = tempfile::tempdir().unwrap();
    let rebuilt_path = write_program(rebuilt_root.path());
    let rebuilt = CircuitArtifact::load(&rebuilt_path).unwrap();
    match NargoExecutor::new(&recompiling, None)
        .execute(&rebuilt, &InputPair::new("0xaa", "0xaa"))
        .await
    {
        Err(ProverError::Execution(msg)) => assert!(msg.contains("recompiled"), "{}", msg),
        other => panic!("expected execution error, got {:?}", other),
    }
    assert!(fs::read_to_string(&rebuilt_path).unwrap().contains("RECOMPILED"));

    backend
        .prove(&rebuilt, Witness::new(b"w3".to_vec()), &ProofOptions::default())
        .await
        .unwrap();
    let proved = fs::read_to_string(tools.path().join("bb.log.circuit")).unwrap();
    assert!(!proved.contains("RECOMPILED"), "{}", proved);
    assert!(proved.contains(&rebuilt.bytecode), "{}", proved);

    // Full pipeline through the configured toolchain
    let config = ProverConfig {
        circuit_path: artifact_path.clone(),
        program_dir: None,
        nargo_bin: nargo.clone(),
        bb_bin: bb.clone(),
        options: ProofOptions::default(),
    };
    let orchestrator = ProofOrchestrator::from_config(&config).unwrap();
    let generated = orchestrator
        .generate_proof(&InputPair::new("0xcafe", "0xcafe"))
        .await
        .unwrap();
    let decoded = abi::decode_proof(&generated.encoded).unwrap();
    assert_eq!(&decoded[..], b"proof:witness:\"0xcafe\"");

    assert!(matches!(
        orchestrator.generate_proof(&InputPair::new("0x00", "0xff")).await,
        Err(ProverError::Execution(_))
    ));
}
