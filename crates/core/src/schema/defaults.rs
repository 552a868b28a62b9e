//! The built-in tag table.
//!
//! Tags listed without their own props get [`COMMON_PROPS`]. Only `bool`,
//! `choices` and `required` entries constrain validation; plain names are
//! kept so the declared surface of every tag stays visible in one place.

use super::{COMMON_PROPS, PropSpec};

fn common() -> Vec<PropSpec> {
    COMMON_PROPS.iter().map(|name| PropSpec::plain(name)).collect()
}

fn with_common(extra: Vec<PropSpec>) -> Vec<PropSpec> {
    let mut props = common();
    props.extend(extra);
    props
}

fn plain(names: &[&str]) -> Vec<PropSpec> {
    names.iter().map(|name| PropSpec::plain(name)).collect()
}

fn booleans(names: &[&str]) -> Vec<PropSpec> {
    names.iter().map(|name| PropSpec::boolean(name)).collect()
}

/// Pushes tags that only carry the common props.
fn simple(names: &[&'static str], tags: &mut Vec<(&'static str, Vec<PropSpec>)>) {
    for name in names {
        tags.push((*name, common()));
    }
}

/// Returns every built-in tag with its declared props, in table order.
pub fn standard_tag_specs() -> Vec<(&'static str, Vec<PropSpec>)> {
    let mut tags: Vec<(&'static str, Vec<PropSpec>)> = Vec::with_capacity(120);

    // Metadata
    tags.push(("html", with_common(plain(&["lang"]))));
    simple(&["head", "title"], &mut tags);
    tags.push(("base", plain(&["href", "target"])));
    tags.push(("meta", plain(&["charset", "http-equiv", "name", "content"])));
    tags.push(("style", with_common(plain(&["media"]))));
    simple(&["body"], &mut tags);

    // Sectioning
    simple(
        &[
            "article", "section", "nav", "aside", "h1", "h2", "h3", "h4", "h5", "h6", "header",
            "footer", "address",
        ],
        &mut tags,
    );

    // Grouping
    simple(&["p", "hr", "pre"], &mut tags);
    tags.push(("blockquote", with_common(plain(&["cite"]))));
    tags.push(("ol", with_common(booleans(&["reversed"]))));
    simple(
        &["ul", "menu", "li", "dl", "dt", "dd", "figure", "figcaption", "main", "div"],
        &mut tags,
    );

    // Text-level
    simple(&["em", "strong", "small", "s"], &mut tags);
    tags.push(("cite", with_common(plain(&["cite"]))));
    tags.push(("q", with_common(plain(&["cite"]))));
    simple(&["dfn", "abbr", "ruby", "rt", "rp"], &mut tags);
    tags.push(("data", with_common(plain(&["value"]))));
    tags.push(("time", with_common(plain(&["datetime"]))));
    simple(
        &[
            "code", "var", "samp", "kbd", "sub", "sup", "i", "b", "u", "mark", "bdi", "bdo", "span",
        ],
        &mut tags,
    );
    tags.push(("br", Vec::new()));
    tags.push(("wbr", Vec::new()));

    // Edits
    tags.push(("ins", with_common(plain(&["cite", "datetime"]))));
    tags.push(("del", with_common(plain(&["cite", "datetime"]))));

    // Embedded content
    simple(&["picture"], &mut tags);
    tags.push((
        "source",
        with_common(plain(&["src", "type", "media", "sizes", "srcset"])),
    ));
    tags.push((
        "img",
        with_common(vec![
            PropSpec::plain("src").required(),
            PropSpec::plain("alt"),
            PropSpec::choices("loading", &["lazy", "eager"]),
            PropSpec::choices("decoding", &["sync", "async", "auto"]),
            PropSpec::choices("fetchpriority", &["high", "low", "auto"]),
            PropSpec::boolean("ismap"),
        ]),
    ));
    tags.push(("iframe", with_common(plain(&["src", "title"]))));
    tags.push(("embed", with_common(plain(&["src", "type"]))));
    tags.push(("object", with_common(plain(&["data", "type"]))));
    tags.push(("param", plain(&["name", "value"])));
    let mut video = vec![PropSpec::plain("src").required(), PropSpec::plain("poster")];
    video.extend(booleans(&["autoplay", "controls", "loop", "muted"]));
    tags.push(("video", with_common(video)));
    let mut audio = vec![PropSpec::plain("src").required()];
    audio.extend(booleans(&["autoplay", "controls", "loop", "muted"]));
    tags.push(("audio", with_common(audio)));
    tags.push((
        "track",
        vec![
            PropSpec::plain("src"),
            PropSpec::choices(
                "kind",
                &["subtitles", "captions", "descriptions", "chapters", "metadata"],
            )
            .required(),
            PropSpec::plain("srclang"),
            PropSpec::plain("label"),
            PropSpec::boolean("default"),
        ],
    ));
    simple(&["map"], &mut tags);
    tags.push(("area", plain(&["alt", "coords", "shape", "href"])));

    // Tables
    simple(
        &[
            "table", "caption", "colgroup", "col", "thead", "tbody", "tfoot", "tr", "th", "td",
        ],
        &mut tags,
    );

    // Forms
    tags.push((
        "form",
        with_common(vec![
            PropSpec::plain("action"),
            PropSpec::choices("method", &["get", "post"]),
            PropSpec::choices(
                "enctype",
                &[
                    "application/x-www-form-urlencoded",
                    "multipart/form-data",
                    "text/plain",
                ],
            ),
            PropSpec::plain("target"),
            PropSpec::boolean("novalidate"),
        ]),
    ));
    tags.push(("label", with_common(plain(&["for"]))));
    let mut select = plain(&["form"]);
    select.extend(booleans(&["autofocus", "disabled", "multiple", "required"]));
    tags.push(("select", with_common(select)));
    simple(&["datalist"], &mut tags);
    let mut optgroup = plain(&["label"]);
    optgroup.extend(booleans(&["disabled"]));
    tags.push(("optgroup", with_common(optgroup)));
    let mut option = plain(&["label", "value"]);
    option.extend(booleans(&["disabled", "selected"]));
    tags.push(("option", with_common(option)));
    let mut textarea = plain(&["rows", "cols"]);
    textarea.extend(booleans(&["autofocus", "disabled", "readonly", "required"]));
    tags.push(("textarea", with_common(textarea)));
    tags.push(("output", with_common(plain(&["for"]))));
    tags.push(("progress", with_common(plain(&["value", "max"]))));
    tags.push(("meter", with_common(plain(&["value", "min", "max"]))));
    tags.push(("fieldset", with_common(booleans(&["disabled"]))));
    simple(&["legend"], &mut tags);
    let mut input = vec![PropSpec::choices(
        "type",
        &[
            "text",
            "password",
            "number",
            "email",
            "checkbox",
            "radio",
            "date",
            "datetime-local",
            "file",
            "hidden",
            "image",
            "month",
            "range",
            "reset",
            "search",
            "submit",
            "tel",
            "time",
            "url",
            "week",
            "color",
        ],
    )];
    input.extend(plain(&[
        "value",
        "placeholder",
        "min",
        "max",
        "step",
        "pattern",
        "accept",
        "autocomplete",
    ]));
    input.extend(booleans(&[
        "disabled",
        "required",
        "checked",
        "multiple",
        "readonly",
        "autofocus",
    ]));
    tags.push(("input", with_common(input)));
    let mut button = vec![
        PropSpec::plain("value"),
        PropSpec::choices("type", &["button", "submit", "reset"]),
    ];
    button.extend(booleans(&["disabled", "formnovalidate"]));
    tags.push(("button", with_common(button)));
    tags.push((
        "a",
        with_common(vec![
            PropSpec::plain("href"),
            PropSpec::choices("target", &["_self", "_blank", "_parent", "_top"]),
            PropSpec::plain("rel"),
            PropSpec::plain("download"),
        ]),
    ));

    // Interactive
    tags.push(("details", with_common(booleans(&["open"]))));
    simple(&["summary"], &mut tags);
    tags.push(("dialog", with_common(booleans(&["open"]))));

    // Scripting
    let mut script = vec![
        PropSpec::plain("src"),
        PropSpec::choices("type", &["module", "text/javascript"]),
    ];
    script.extend(booleans(&["async", "defer", "nomodule"]));
    tags.push(("script", with_common(script)));
    simple(&["noscript", "template", "slot"], &mut tags);
    tags.push(("canvas", with_common(plain(&["width", "height"]))));

    // Links
    let mut link = vec![
        PropSpec::plain("href").required(),
        PropSpec::choices(
            "rel",
            &[
                "stylesheet",
                "icon",
                "preload",
                "prefetch",
                "modulepreload",
                "manifest",
            ],
        ),
        PropSpec::plain("as"),
        PropSpec::plain("type"),
    ];
    link.extend(booleans(&["disabled"]));
    link.extend(plain(&["media", "sizes"]));
    tags.push(("link", link));

    tags
}
