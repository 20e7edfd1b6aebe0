//  ██████╗  █████╗ ███████╗███████╗██╗███╗   ██╗ ██████╗
//  ██╔══██╗██╔══██╗██╔════╝██╔════╝██║████╗  ██║██╔════╝
//  ██████╔╝███████║███████╗███████╗██║██╔██╗ ██║██║  ███╗
//  ██╔═══╝ ██╔══██║╚════██║╚════██║██║██║╚██╗██║██║   ██║
//  ██║     ██║  ██║███████║███████║██║██║ ╚████║╚██████╔╝
//  ╚═╝     ╚═╝  ╚═╝╚══════╝╚══════╝╚═╝╚═╝  ╚═══╝ ╚═════╝


#[cfg(test)]
mod passing {
    use microdata::{Item, Microdata, MicrodataDocument, PropertyValue, TypeNames};
    use serde_json::json;

    #[test]
    fn document_to_json() {
        let document = MicrodataDocument::from_html(
            r#"
<section itemscope itemtype="http://example.org/animals#dog http://example.org/animals#domestic">
  <span itemprop="name">German Shepherd</span>
</section>"#,
            None,
        )
        .unwrap();

        assert_eq!(
            document.to_microdata().to_json(false).unwrap(),
            r#"{"items":[{"type":["http://example.org/animals#dog","http://example.org/animals#domestic"],"properties":{"name":["German Shepherd"]}}]}"#
        );
    }

    #[test]
    fn element_to_item() {
        let document = MicrodataDocument::from_html(
            r#"
<section itemscope itemtype="http://example.org/animals#dog http://example.org/animals#domestic" itemid="german-shepherd">
  <span itemprop="name">German Shepherd</span>
  <span itemprop="temperament" itemscope itemtype="http://example.org/animals#temperament">
    <span itemprop="name">Intelligent</span>
  </span>
</section>"#,
            None,
        )
        .unwrap();
        let item = document.get_items(TypeNames::any())[0].to_item().unwrap();

        assert_eq!(
            serde_json::to_value(&item).unwrap(),
            json!({
                "type": ["http://example.org/animals#dog", "http://example.org/animals#domestic"],
                "id": "german-shepherd",
                "properties": {
                    "name": ["German Shepherd"],
                    "temperament": [{
                        "type": ["http://example.org/animals#temperament"],
                        "properties": { "name": ["Intelligent"] }
                    }]
                }
            })
        );
    }

    #[test]
    fn id_comes_before_type() {
        let document = MicrodataDocument::from_html(
            r#"<div itemscope itemtype="http://x.org/T" itemid="urn:x:1"></div>"#,
            None,
        )
        .unwrap();

        assert_eq!(
            document.to_microdata().to_json(false).unwrap(),
            r#"{"items":[{"id":"urn:x:1","type":["http://x.org/T"],"properties":{}}]}"#
        );
    }

    #[test]
    fn from_filtered_items() {
        let document = MicrodataDocument::from_html(
            r#"<div itemscope itemtype="http://x.org/A"></div><div itemscope itemtype="http://x.org/B"></div>"#,
            None,
        )
        .unwrap();
        let microdata = Microdata::from_items(&document.get_items("http://x.org/B"));

        assert_eq!(microdata.items.len(), 1);
        assert_eq!(microdata.items[0].item_type, Some(vec!["http://x.org/B".to_string()]));
    }

    #[test]
    fn urls_are_resolved() {
        let document = MicrodataDocument::from_html(
            r#"<div itemscope><a itemprop="url" href="/about">About</a></div>"#,
            Some("https://example.com/index.html"),
        )
        .unwrap();
        let microdata = document.to_microdata();

        assert_eq!(
            microdata.items[0].property("url"),
            Some(&PropertyValue::Text("https://example.com/about".to_string()))
        );
    }

    #[test]
    fn pretty_output() {
        let microdata = Microdata {
            items: vec![Item::default()],
        };

        assert_eq!(
            microdata.to_json(true).unwrap(),
            "{\n  \"items\": [\n    {\n      \"properties\": {}\n    }\n  ]\n}"
        );
    }

    #[test]
    fn parse_output_back() {
        let document = MicrodataDocument::from_html(
            r#"<div itemscope><img itemprop="logo"><span itemprop="name">N</span></div>"#,
            None,
        )
        .unwrap();
        let microdata = document.to_microdata();
        let parsed: Microdata = serde_json::from_str(&microdata.to_json(false).unwrap()).unwrap();

        assert_eq!(parsed, microdata);
        assert_eq!(parsed.items[0].property("logo"), Some(&PropertyValue::Missing));
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
    use microdata::{Microdata, MicrodataDocument};
    use serde_json::json;

    #[test]
    fn non_items_are_skipped() {
        let document = MicrodataDocument::from_html(r#"<p id="p">text</p>"#, None).unwrap();
        let paragraph = document.get_element_by_id("p").unwrap();

        assert!(paragraph.to_item().is_none());
        assert!(Microdata::from_items(&[paragraph]).items.is_empty());
    }

    #[test]
    fn no_items() {
        let document = MicrodataDocument::from_html("", None).unwrap();
        assert_eq!(serde_json::to_value(document.to_microdata()).unwrap(), json!({ "items": [] }));
    }

    #[test]
    fn self_referencing_items_terminate() {
        let document = MicrodataDocument::from_html(
            r#"<div itemscope itemref="b"></div>
               <div id="b" itemprop="b" itemscope itemref="c"></div>
               <div id="c" itemprop="c" itemscope itemref="b"></div>"#,
            None,
        )
        .unwrap();

        let value = serde_json::to_value(document.to_microdata()).unwrap();
        assert_eq!(
            value,
            json!({
                "items": [{
                    "properties": {
                        "b": [{
                            "properties": {
                                "c": [{
                                    "properties": { "b": [{ "properties": {} }] }
                                }]
                            }
                        }]
                    }
                }]
            })
        );
    }
}
