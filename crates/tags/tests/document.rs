use zenhtml_tags::tags as h;
use zenhtml_tags::{HtmlDocument, HtmlStream, Options, PropValue, TagSchema, raw};

fn strict() -> (&'static TagSchema, Options) {
    (TagSchema::standard(), Options::strict())
}

#[test]
fn document_matches_expected_layout() {
    let (schema, options) = strict();
    let page = HtmlDocument::new("Example")
        .description("A page")
        .lang("ja")
        .stylesheet("/style.css")
        .body_node(
            h::main()
                .child(h::h1().child("Hello & welcome").build_with(schema, &options).unwrap())
                .child(raw("<!-- content -->"))
                .build_with(schema, &options)
                .unwrap(),
        )
        .build_with(schema, &options)
        .expect("document should build");

    insta::assert_snapshot!(page.to_pretty_string(0), @r"
    <html lang='ja'>
      <head>
        <meta charset='utf-8' />
        <meta name='viewport' content='width=device-width, initial-scale=1' />
        <meta name='description' content='A page' />
        <meta name='keywords' content='' />
        <meta http-equiv='Pragma' content='no-cache' />
        <meta http-equiv='Cache-Control' content='no-store' />
        <title>
          Example
        </title>
        <link href='/style.css' rel='stylesheet' />
      </head>
      <body>
        <main>
          <h1>
            Hello &amp; welcome
          </h1>
          <!-- content -->
        </main>
      </body>
    </html>
    ");
}

#[test]
fn streamed_document_starts_with_doctype() {
    let (schema, options) = strict();
    let page = HtmlDocument::new("Example")
        .body_node(h::p().child("body").build_with(schema, &options).unwrap())
        .head_node(
            h::meta()
                .attr("name", "robots")
                .attr("content", "noindex")
                .build_with(schema, &options)
                .unwrap(),
        )
        .build_with(schema, &options)
        .unwrap();

    let mut out = Vec::new();
    let written = HtmlStream::from_node(&page)
        .with_doctype()
        .write_to(&mut out)
        .expect("writing to a Vec cannot fail");
    let body = String::from_utf8(out).unwrap();

    assert_eq!(written, body.len());
    assert!(body.starts_with("<!DOCTYPE html><html"));
    assert!(body.contains("<title>Example</title>"));
    assert!(body.contains("<p>body</p>"));
    assert!(body.contains("<meta name='robots' content='noindex'/>"));
}

#[test]
fn generated_constructors_validate() {
    let (schema, options) = strict();

    let err = h::input()
        .attr("type", "banana")
        .build_with(schema, &options)
        .unwrap_err();
    assert!(err.violation().is_some());

    let field = h::input()
        .attr("type", "email")
        .attr("required", true)
        .attr("placeholder", "you@example.com")
        .build_with(schema, &options)
        .unwrap();
    assert_eq!(
        field.to_html(),
        "<input type='email' required placeholder='you@example.com'/>"
    );

    let row = h::tr()
        .children(["a", "b"].map(|text| h::td().child(text).build_with(schema, &options).unwrap()))
        .dataset(PropValue::map([("rowId", 7)]))
        .build_with(schema, &options)
        .unwrap();
    assert_eq!(
        row.to_html(),
        "<tr data-row-id='7'><td>a</td><td>b</td></tr>"
    );
}

#[test]
fn lenient_select_keeps_rendering() {
    let select = h::select()
        .attr("multiple", "yes")
        .attr("id", "pick")
        .child(h::option().attr("value", "1").child("One").build().unwrap())
        .build_with(TagSchema::standard(), &Options::lenient())
        .unwrap();
    assert_eq!(
        select.to_html(),
        "<select id='pick'><option value='1'>One</option></select>"
    );
}
