use checker::{report, CheckReport, CheckRequest, Checker, Config};
use eyre::WrapErr;
use rustyline::{error::ReadlineError, DefaultEditor};
use tracing::{debug, metadata::LevelFilter};
use tracing_subscriber::EnvFilter;

const EMAIL_PROMPT: &str = "Enter email to check for breaches: ";
const DOMAIN_PROMPT: &str = "Enter domain to check (e.g.: example.com): ";

fn setup_logger() -> eyre::Result<()> {
    // WARN unless RUST_LOG says otherwise, e.g. RUST_LOG=checker=debug
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    // stdout belongs to the report
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .wrap_err("setting default subscriber failed")?;

    Ok(())
}

/// Returns `None` when the user bails out with CTRL-C or CTRL-D.
fn read_request(rl: &mut DefaultEditor) -> eyre::Result<Option<CheckRequest>> {
    let mut read = |prompt: &str| match rl.readline(prompt) {
        Ok(line) => Ok(Some(line)),
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(eyre::Report::new(e).wrap_err("failed to read input")),
    };

    let email = match read(EMAIL_PROMPT)? {
        Some(email) => email,
        None => return Ok(None),
    };
    let domain = match read(DOMAIN_PROMPT)? {
        Some(domain) => domain,
        None => return Ok(None),
    };

    Ok(Some(CheckRequest::new(&email, &domain)))
}

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    setup_logger()?;

    let config = Config::load()?;
    debug!(?config, "loaded config");
    let checker = Checker::new(config)?;

    let rt = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
    let mut rl = DefaultEditor::new()?;

    println!("{}", report::banner());

    let request = match read_request(&mut rl)? {
        Some(request) => request,
        None => {
            println!("Aborted.");
            return Ok(());
        }
    };

    println!("{}", report::breach_progress(&request.email));
    let breach = rt.block_on(checker.check_email(&request.email));
    for line in report::breach_lines(&breach) {
        println!("{}", line);
    }

    println!("{}", report::domain_progress(&request.domain));
    let domain = rt.block_on(checker.check_domain(&request.domain));
    for line in report::domain_lines(&domain) {
        println!("{}", line);
    }

    let report = CheckReport { breach, domain };
    print!("{}", report::Summary::new(&request, &report));

    Ok(())
}
