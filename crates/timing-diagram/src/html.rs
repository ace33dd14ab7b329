use crate::diagram::Bar;
use crate::diagram::Diagram;
use crate::diagram::Settlement;
use std::fmt::Write;

const DOCUMENT_START: &str = "<html>\n\n<head>\n";

const HEAD: &str = r#"	<link href='https://fonts.googleapis.com/css?family=Open+Sans' rel='stylesheet' type='text/css'>
	<style>
		html {
			width: 10000px;
			font-family: Open Sans;
		}

		.container {
			height: 25px;
			flex-direction: row;
			display: flex;
			margin-bottom: 5px;
			align-content: center;
		}

		.htlc {
		}

		.text {
			margin-left: 10px;
			display: flex;
			align-content: center;
			white-space: nowrap;
		}

		p { margin: auto; }
	</style>
</head>

<body>
"#;

const EPILOGUE: &str = "
</body>

</html>
";

/// Renders the whole document. Nothing is written anywhere until it is complete.
pub fn render(diagram: &Diagram) -> String {
    let mut html = String::from(DOCUMENT_START);
    let _ = writeln!(html, "\t<title>Payment {}</title>", escape(&diagram.payment_hash));
    html.push_str(HEAD);

    for bar in &diagram.bars {
        write_bar(&mut html, bar);
    }

    write_settlement(&mut html, &diagram.settlement);

    html.push_str(EPILOGUE);
    html
}

fn write_bar(html: &mut String, bar: &Bar) {
    // writing into a `String` cannot fail
    let _ = writeln!(
        html,
        "<div class=\"container\">\
         <div style=\"width:{}px;\"></div>\
         <div class=\"htlc\" style=\"width:{}px;background-color:{};\"></div>\
         <div class=\"text\"><p>{}</p></div>\
         </div>",
        bar.start_px,
        bar.width_px(),
        bar.color.css(),
        escape(&bar.label),
    );
}

fn write_settlement(html: &mut String, settlement: &Settlement) {
    html.push_str("<br/><br/>\n");

    for (route, amt) in settlement.routes() {
        let _ = writeln!(html, "Settled via {}: {amt} sats<br/>", escape(route));
    }

    let _ = writeln!(html, "<br/>Total settled: {} sats", settlement.total());
}

/// Escapes text content. `>` is left alone, route texts use it as separator.
fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::BarColor;
    use crate::diagram::TimeAxis;

    fn diagram(bars: Vec<Bar>, settlement: Settlement) -> Diagram {
        Diagram {
            payment_hash: "aa".to_string(),
            axis: TimeAxis {
                start_ns: 0,
                end_ns: 1_500,
                ns_per_px: 1,
            },
            bars,
            settlement,
        }
    }

    #[test]
    fn bar_row_layout() {
        let html = render(&diagram(
            vec![Bar {
                start_px: 10,
                end_px: 760,
                color: BarColor::Green,
                label: "1001 sat (ABCDEF (123) )".to_string(),
            }],
            Settlement::default(),
        ));

        assert!(html.contains(
            "<div class=\"container\"><div style=\"width:10px;\"></div>\
             <div class=\"htlc\" style=\"width:750px;background-color:green;\"></div>\
             <div class=\"text\"><p>1001 sat (ABCDEF (123) )</p></div></div>\n"
        ));
    }

    #[test]
    fn summary_lists_routes_then_total() {
        let mut settlement = Settlement::default();
        settlement.add("bbbbbb (2) ", 300).unwrap();
        settlement.add("aaaaaa (1)  > cccccc", 700).unwrap();

        let html = render(&diagram(vec![], settlement));

        assert!(html.contains(
            "<br/><br/>\n\
             Settled via aaaaaa (1)  > cccccc: 700 sats<br/>\n\
             Settled via bbbbbb (2) : 300 sats<br/>\n\
             <br/>Total settled: 1000 sats\n"
        ));
    }

    #[test]
    fn document_envelope() {
        let html = render(&diagram(vec![], Settlement::default()));

        assert!(html.starts_with("<html>\n\n<head>\n\t<title>Payment aa</title>\n\t<link "));
        assert!(html.contains("fonts.googleapis.com"));
        assert!(html.contains("width: 10000px;"));
        assert!(html.contains("white-space: nowrap;"));
        assert!(html.trim_end().ends_with("</body>\n\n</html>"));
        assert!(html.contains("<br/>Total settled: 0 sats\n"));
    }

    #[test]
    fn title_names_the_payment() {
        let mut diagram = diagram(vec![], Settlement::default());
        diagram.payment_hash = "<script>".to_string();

        let html = render(&diagram);

        assert!(html.contains("<title>Payment &lt;script></title>"));
    }

    #[test]
    fn labels_are_escaped() {
        assert_eq!(escape("<b>A&B</b> > c"), "&lt;b>A&amp;B&lt;/b> > c");
    }
}
