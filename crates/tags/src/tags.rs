//! One constructor per built-in tag.
//!
//! Each function returns an [`Element`] bound to its tag; the schema lookup
//! happens when the element is built, so these stay thin call sites.

use zenhtml_core::Element;

macro_rules! tags {
    ($($name:ident => $tag:literal),* $(,)?) => {
        $(
            #[doc = concat!("Starts a `<", $tag, ">` element.")]
            pub fn $name() -> Element {
                Element::new($tag)
            }
        )*

        /// Tags with a generated constructor, in table order.
        pub const ALL_TAGS: &[&str] = &[$($tag),*];
    };
}

tags! {
    html => "html",
    head => "head",
    title => "title",
    base => "base",
    meta => "meta",
    style => "style",
    body => "body",
    article => "article",
    section => "section",
    nav => "nav",
    aside => "aside",
    h1 => "h1",
    h2 => "h2",
    h3 => "h3",
    h4 => "h4",
    h5 => "h5",
    h6 => "h6",
    header => "header",
    footer => "footer",
    address => "address",
    p => "p",
    hr => "hr",
    pre => "pre",
    blockquote => "blockquote",
    ol => "ol",
    ul => "ul",
    menu => "menu",
    li => "li",
    dl => "dl",
    dt => "dt",
    dd => "dd",
    figure => "figure",
    figcaption => "figcaption",
    main => "main",
    div => "div",
    em => "em",
    strong => "strong",
    small => "small",
    s => "s",
    cite => "cite",
    q => "q",
    dfn => "dfn",
    abbr => "abbr",
    ruby => "ruby",
    rt => "rt",
    rp => "rp",
    data => "data",
    time => "time",
    code => "code",
    var => "var",
    samp => "samp",
    kbd => "kbd",
    sub => "sub",
    sup => "sup",
    i => "i",
    b => "b",
    u => "u",
    mark => "mark",
    bdi => "bdi",
    bdo => "bdo",
    span => "span",
    br => "br",
    wbr => "wbr",
    ins => "ins",
    del => "del",
    picture => "picture",
    source => "source",
    img => "img",
    iframe => "iframe",
    embed => "embed",
    object => "object",
    param => "param",
    video => "video",
    audio => "audio",
    track => "track",
    map => "map",
    area => "area",
    table => "table",
    caption => "caption",
    colgroup => "colgroup",
    col => "col",
    thead => "thead",
    tbody => "tbody",
    tfoot => "tfoot",
    tr => "tr",
    th => "th",
    td => "td",
    form => "form",
    label => "label",
    select => "select",
    datalist => "datalist",
    optgroup => "optgroup",
    option => "option",
    textarea => "textarea",
    output => "output",
    progress => "progress",
    meter => "meter",
    fieldset => "fieldset",
    legend => "legend",
    input => "input",
    button => "button",
    a => "a",
    details => "details",
    summary => "summary",
    dialog => "dialog",
    script => "script",
    noscript => "noscript",
    template => "template",
    slot => "slot",
    canvas => "canvas",
    link => "link",
}
