use std::io::Write;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use panagram_prover::{logging, InputPair, ProofOrchestrator, ProverConfig};

#[derive(Parser, Debug)]
#[command(name = "generate_proof")]
#[command(about = "Generate an ABI-encoded UltraHonk proof for the panagram circuit", long_about = None)]
struct Args {
    /// Hash of the guessed word
    guess_hash: String,

    /// Hash of the answer
    answer_hash: String,
}

/// Prove `args` and write the encoded proof to `out`, unframed.
async fn run(config: &ProverConfig, args: Args, out: &mut impl Write) -> anyhow::Result<()> {
    let orchestrator = ProofOrchestrator::from_config(config)?;

    let inputs = InputPair::new(args.guess_hash, args.answer_hash);
    let generated = orchestrator.generate_proof(&inputs).await?;

    tracing::debug!(
        circuit = %generated.metadata.circuit_hash,
        proof_size = generated.metadata.proof_size,
        "Encoded proof"
    );
    out.write_all(generated.to_hex().as_bytes())
        .and_then(|_| out.flush())
        .context("failed to write proof to stdout")
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            return ExitCode::FAILURE;
        }
        // --help / --version
        Err(err) => err.exit(),
    };

    logging::init();

    match run(&ProverConfig::default(), args, &mut std::io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("Error during proof generation: {:#}", err);
            eprintln!("Script execution failed.");
            ExitCode::FAILURE
        }
    }
}
