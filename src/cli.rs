use clap::Parser;

#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    #[arg(help = "Location of the root schema document, a file path or URL")]
    pub location: String,

    #[arg(
        long,
        value_name = "NAME",
        help = "Report where the type NAME is declared (repeatable)"
    )]
    pub find_type: Vec<String>,

    #[arg(long, value_name = "URL", help = "Fetch remote documents through this proxy")]
    pub proxy: Option<String>,

    #[arg(
        long,
        value_name = "LOGIN",
        requires = "proxy",
        help = "User name for basic proxy authentication"
    )]
    pub proxy_login: Option<String>,

    #[arg(
        long,
        value_name = "PASSWORD",
        requires = "proxy_login",
        help = "Password for basic proxy authentication"
    )]
    pub proxy_password: Option<String>,

    #[arg(long, help = "Allow a XML Document Type Definition (DTD) to occur")]
    pub allow_dtd: bool,
}
