//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝


#[cfg(test)]
mod passing {
    use microdata::core::MicrodataOptions;
    use microdata::env::{self, EnvVar};

    #[test]
    fn new_uses_base_element() {
        let options = MicrodataOptions::new();

        assert!(options.use_base_element);
        assert!(options.types.is_empty());
        assert!(!options.pretty);
    }

    #[test]
    fn default_matches_new() {
        let options = MicrodataOptions::default();

        assert!(options.use_base_element);
        assert!(options.base_url.is_none());
        assert!(options.encoding.is_none());
    }

    #[test]
    fn env_docs() {
        let docs = env::generate_env_docs();

        assert!(docs.contains(env::core::LogLevel::NAME));
        assert!(docs.contains(env::core::BaseUrl::NAME));
        assert!(docs.contains(env::core::NoColor::NAME));
    }
}

//  ███████╗ █████╗ ██╗██╗     ██╗███╗   ██╗ ██████╗
//  ██╔════╝██╔══██╗██║██║     ██║████╗  ██║██╔════╝
//  █████╗  ███████║██║██║     ██║██╔██╗ ██║██║  ███╗
//  ██╔══╝  ██╔══██║██║██║     ██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║██║███████╗██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚═╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝

#[cfg(test)]
mod failing {
    use microdata::env::{self, EnvVar};
    use microdata::MicrodataError;

    #[test]
    fn invalid_log_level() {
        assert!(matches!(
            env::core::LogLevel::parse("chatty"),
            Err(MicrodataError::Config { .. })
        ));
    }

    #[test]
    fn relative_base_url() {
        assert!(matches!(
            env::core::BaseUrl::parse("docs/index.html"),
            Err(MicrodataError::Config { .. })
        ));
    }
}
