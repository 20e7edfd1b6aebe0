//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝


#[cfg(test)]
mod passing {
    use assert_cmd::Command;
    use std::env;
    use std::fs;

    const PAGE: &str = r#"<div itemscope itemtype="http://schema.org/Person"><span itemprop="name">Elizabeth</span></div>"#;

    #[test]
    fn print_help_information() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg("-h")
            .output()
            .unwrap();

        assert!(String::from_utf8_lossy(&out.stdout).contains("Extracts HTML microdata items as JSON"));
        assert_eq!(out.status.code(), Some(0));
    }

    #[test]
    fn print_version() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg("-V")
            .output()
            .unwrap();

        assert_eq!(
            String::from_utf8_lossy(&out.stdout),
            format!("{} {}\n", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
        );
        assert_eq!(out.status.code(), Some(0));
    }

    #[test]
    fn read_stdin() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .env_remove("MICRODATA_BASE_URL")
            .write_stdin(PAGE)
            .output()
            .unwrap();

        assert_eq!(
            String::from_utf8_lossy(&out.stdout),
            "{\"items\":[{\"type\":[\"http://schema.org/Person\"],\"properties\":{\"name\":[\"Elizabeth\"]}}]}\n"
        );
        assert_eq!(String::from_utf8_lossy(&out.stderr), "");
        assert_eq!(out.status.code(), Some(0));
    }

    #[test]
    fn read_file_pretty() {
        let path = env::temp_dir().join(format!("microdata-cli-pretty-{}.html", std::process::id()));
        fs::write(&path, PAGE).unwrap();

        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg("-p")
            .arg(&path)
            .output()
            .unwrap();
        fs::remove_file(&path).unwrap();

        let stdout = String::from_utf8_lossy(&out.stdout);
        assert!(stdout.starts_with("{\n  \"items\": ["));
        let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
        assert_eq!(value["items"][0]["properties"]["name"][0], "Elizabeth");
        assert_eq!(out.status.code(), Some(0));
    }

    #[test]
    fn write_output_file() {
        let path = env::temp_dir().join(format!("microdata-cli-output-{}.json", std::process::id()));

        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg("-s")
            .arg("-o")
            .arg(&path)
            .write_stdin(PAGE)
            .output()
            .unwrap();

        let written = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(String::from_utf8_lossy(&out.stdout), "");
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["items"][0]["type"][0], "http://schema.org/Person");
        assert_eq!(out.status.code(), Some(0));
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
    use assert_cmd::Command;

    #[test]
    fn missing_file() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .env("NO_COLOR", "1")
            .arg("/no/such/dir/page.html")
            .output()
            .unwrap();

        assert_eq!(
            String::from_utf8_lossy(&out.stderr),
            "Error: I/O error: File not found: /no/such/dir/page.html\n"
        );
        assert_eq!(String::from_utf8_lossy(&out.stdout), "");
        assert_eq!(out.status.code(), Some(1));
    }

    #[test]
    fn colored_error() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .env_remove("NO_COLOR")
            .arg("/no/such/dir/page.html")
            .output()
            .unwrap();

        let stderr = String::from_utf8_lossy(&out.stderr);
        assert!(stderr.starts_with("\x1b[31mError:"));
        assert_eq!(out.status.code(), Some(1));
    }

    #[test]
    fn unknown_option() {
        let out = Command::cargo_bin(env!("CARGO_PKG_NAME"))
            .unwrap()
            .arg("--frobnicate")
            .output()
            .unwrap();

        assert_eq!(String::from_utf8_lossy(&out.stdout), "");
        assert_ne!(out.status.code(), Some(0));
    }
}
