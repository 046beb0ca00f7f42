//! The HTML element catalog.
//!
//! Every element is a plain struct with one public field per attribute,
//! builder setters of the same name, and the shared [`GlobalAttributes`].
//! Field names that collide with Rust keywords carry a trailing underscore
//! (`type_`, `for_`, `async_`, `loop_`, `default_`); the rendered attribute
//! name never does.
//!
//! ```
//! use reinhardt_markup_tags::prelude::*;
//!
//! let link = A::new().href("/docs?page=2&lang=en").child("Docs");
//! assert_eq!(
//!     link.into_node().render_to_string().unwrap(),
//!     "<a href=/docs?page=2&lang=en>Docs</a>"
//! );
//! ```

use reinhardt_markup_core::{AttributeWriter, DataAttributes, Element, IntoNode, Node, RenderError};

use crate::enums::{
	Autocomplete, ButtonType, CommandType, Cors, Enctype, InputType, Keytype, MenuType, Method,
	Preload, Sandbox, Scope, Shape, TrackKind, Wrap,
};
use crate::global::{GlobalAttributes, HtmlElement};

html_elements! {
	/// A hyperlink.
	A("a") {
		href: text,
		target: text,
		ping: text,
		rel: text,
		media: text,
		hreflang: text,
		type_ = "type": text,
	}
	Abbr("abbr") {}
	Address("address") {}
	/// A clickable region of an image map. `coords` renders as comma-separated integers.
	Area("area", end = false) {
		alt: text,
		coords: list,
		shape: token Shape,
		href: text,
		target: text,
		ping: text,
		rel: text,
		media: text,
		hreflang: text,
		type_ = "type": text,
	}
	Article("article") {}
	Aside("aside") {}
	Audio("audio") {
		src: text,
		crossorigin: token Cors,
		preload: token Preload,
		autoplay: flag,
		mediagroup: text,
		loop_ = "loop": flag,
		muted: flag,
		controls: flag,
	}
	B("b") {}
	Base("base", end = false) {
		href: text,
		target: text,
	}
	Bdi("bdi") {}
	Bdo("bdo") {}
	Blockquote("blockquote") {
		cite: text,
	}
	/// Document body. The end tag is omitted unless every tag is requested.
	Body("body", end = false) {
		onafterprint: text,
		onbeforeprint: text,
		onbeforeunload: text,
		onhashchange: text,
		onmessage: text,
		onoffline: text,
		ononline: text,
		onpagehide: text,
		onpageshow: text,
		onpopstate: text,
		onresize: text,
		onscroll: text,
		onstorage: text,
		onunload: text,
	}
	/// A line break.
	Br("br", end = false) {}
	Button("button") {
		autofocus: flag,
		disabled: flag,
		form: text,
		formaction: text,
		formenctype: token Enctype,
		formmethod: token Method,
		formnovalidate: flag,
		formtarget: text,
		name: text,
		type_ = "type": token ButtonType,
		value: text,
	}
	Canvas("canvas") {
		width: int,
		height: int,
	}
	Caption("caption") {}
	Cite("cite") {}
	Code("code") {}
	Col("col", end = false) {
		span: int,
	}
	Colgroup("colgroup", end = false) {
		span: int,
	}
	Command("command", end = false) {
		type_ = "type": token CommandType,
		label: text,
		icon: text,
		disabled: flag,
		checked: flag,
		radiogroup: text,
	}
	Datalist("datalist") {}
	Dd("dd", end = false) {}
	Del("del") {
		cite: text,
		datetime: text,
	}
	Details("details") {
		open: text,
	}
	Dfn("dfn") {}
	Div("div") {}
	Dl("dl") {}
	Dt("dt", end = false) {}
	Em("em") {}
	Embed("embed", end = false) {
		src: text,
		type_ = "type": text,
		width: int,
		height: int,
	}
	Fieldset("fieldset") {
		disabled: flag,
		form: text,
		name: text,
	}
	Figcaption("figcaption") {}
	Figure("figure") {}
	Footer("footer") {}
	/// A form. `accept_charset` renders as `accept-charset`.
	Form("form") {
		accept_charset = "accept-charset": text,
		action: text,
		autocomplete: token Autocomplete,
		enctype: token Enctype,
		method: token Method,
		name: text,
		novalidate: flag,
		target: text,
	}
	H1("h1") {}
	H2("h2") {}
	H3("h3") {}
	H4("h4") {}
	H5("h5") {}
	H6("h6") {}
	/// Document head. The end tag is omitted unless every tag is requested.
	Head("head", end = false) {}
	Header("header") {}
	Hgroup("hgroup") {}
	Hr("hr", end = false) {}
	/// The document root.
	///
	/// Both tags are omitted by default; the `<!DOCTYPE html>` preamble is
	/// always emitted. Setting any attribute forces the start tag.
	Html("html", start = false, end = false, preamble = "<!DOCTYPE html>") {
		manifest: text,
	}
	I("i") {}
	/// An inline frame. `sandbox` renders its set restrictions in ascending bit order.
	Iframe("iframe") {
		src: text,
		srcdoc: text,
		name: text,
		sandbox: flags Sandbox,
		seamless: flag,
		width: int,
		height: int,
	}
	/// An image.
	Img("img", end = false) {
		alt: text,
		src: text,
		crossorigin: token Cors,
		usemap: text,
		ismap: flag,
		width: int,
		height: int,
	}
	/// A form control. `checked` and `readonly` render as bare attributes.
	Input("input", end = false) {
		accept: text,
		alt: text,
		autocomplete: token Autocomplete,
		autofocus: flag,
		checked: flag,
		dirname: text,
		disabled: flag,
		form: text,
		formaction: text,
		formenctype: token Enctype,
		formmethod: token Method,
		formnovalidate: flag,
		formtarget: text,
		height: int,
		list: text,
		max: text,
		maxlength: int,
		min: text,
		multiple: flag,
		name: text,
		pattern: text,
		placeholder: text,
		readonly: flag,
		required: flag,
		size: int,
		src: text,
		step: text,
		type_ = "type": token InputType,
		value: text,
		width: int,
	}
	Ins("ins") {
		cite: text,
		datetime: text,
	}
	Kbd("kbd") {}
	Keygen("keygen", end = false) {
		autofocus: flag,
		challenge: text,
		disabled: flag,
		form: text,
		keytype: token Keytype,
		name: text,
	}
	Label("label") {
		form: text,
		for_ = "for": text,
	}
	Legend("legend") {}
	/// A list item.
	Li("li", end = false) {
		value: int,
	}
	Link("link", end = false) {
		href: text,
		rel: text,
		media: text,
		hreflang: text,
		type_ = "type": text,
		sizes: text,
	}
	Map("map") {
		name: text,
	}
	Mark("mark") {}
	Menu("menu") {
		type_ = "type": token MenuType,
		label: text,
	}
	/// Document metadata. `http_equiv` renders as `http-equiv`.
	Meta("meta", end = false) {
		name: text,
		http_equiv = "http-equiv": text,
		content: text,
		charset: text,
	}
	/// A scalar measurement. `value` is always rendered.
	Meter("meter") {
		value: number,
		min: float,
		max: float,
		low: float,
		high: float,
		optimum: float,
	}
	Nav("nav") {}
	Noscript("noscript") {}
	Object("object") {
		data: text,
		type_ = "type": text,
		typemustmatch: flag,
		name: text,
		usemap: text,
		form: text,
		width: int,
		height: int,
	}
	Ol("ol") {
		reversed: flag,
		start: int,
	}
	Optgroup("optgroup") {
		disabled: flag,
		label: text,
	}
	/// An `<option>` inside a `<select>` or `<datalist>`.
	///
	/// Named to avoid shadowing [`Option`](std::option::Option).
	OptionElement("option", end = false) {
		disabled: flag,
		label: text,
		selected: flag,
		value: text,
	}
	Output("output") {
		for_ = "for": text,
		form: text,
		name: text,
	}
	P("p") {}
	Param("param", end = false) {
		name: text,
		value: text,
	}
	Pre("pre") {}
	Progress("progress") {
		value: float,
		max: float,
	}
	Q("q") {
		cite: text,
	}
	Rp("rp", end = false) {}
	Rt("rt", end = false) {}
	Ruby("ruby") {}
	S("s") {}
	Samp("samp") {}
	/// A script element whose children are escaped like any other text.
	///
	/// Use [`ScriptLiteral`](crate::ScriptLiteral) for verbatim code.
	Script("script") {
		src: text,
		async_ = "async": flag,
		defer: flag,
		type_ = "type": text,
		charset: text,
	}
	Section("section") {}
	Select("select") {
		autofocus: flag,
		disabled: flag,
		form: text,
		multiple: flag,
		name: text,
		required: flag,
		size: int,
	}
	Small("small") {}
	Source("source", end = false) {
		src: text,
		type_ = "type": text,
		media: text,
	}
	Span("span") {}
	Strong("strong") {}
	/// A style element whose children are escaped like any other text.
	///
	/// Use [`StyleLiteral`](crate::StyleLiteral) for verbatim CSS.
	Style("style") {
		media: text,
		type_ = "type": text,
		scoped: flag,
	}
	Sub("sub") {}
	Summary("summary") {}
	Sup("sup") {}
	/// A table.
	Table("table") {
		border: text,
	}
	Tbody("tbody", end = false) {}
	/// A table cell.
	Td("td", end = false) {
		colspan: int,
		rowspan: int,
		headers: text,
	}
	Textarea("textarea") {
		autofocus: flag,
		cols: int,
		dirname: text,
		disabled: flag,
		form: text,
		maxlength: int,
		name: text,
		placeholder: text,
		readonly: flag,
		required: flag,
		rows: int,
		wrap: token Wrap,
	}
	Tfoot("tfoot", end = false) {}
	/// A header cell.
	Th("th", end = false) {
		colspan: int,
		rowspan: int,
		headers: text,
		scope: token Scope,
	}
	Thead("thead", end = false) {}
	Time("time") {
		datetime: text,
		pubdate: flag,
	}
	Title("title") {}
	/// A table row.
	Tr("tr", end = false) {}
	/// A timed text track. `default_` renders as `default`.
	Track("track", end = false) {
		default_ = "default": flag,
		kind: token TrackKind,
		label: text,
		src: text,
		srclang: text,
	}
	U("u") {}
	Ul("ul") {}
	Var("var") {}
	Video("video") {
		src: text,
		crossorigin: token Cors,
		poster: text,
		preload: token Preload,
		autoplay: flag,
		mediagroup: text,
		loop_ = "loop": flag,
		muted: flag,
		controls: flag,
		width: int,
		height: int,
	}
	/// A line-break opportunity.
	Wbr("wbr", end = false) {}
}

#[cfg(test)]
mod tests {
	use super::*;
	use reinhardt_markup_core::{RenderOptions, render_to_string, render_to_string_with};
	use rstest::rstest;

	#[rstest]
	#[case(Br::new().into_node(), "<br>")]
	#[case(Hr::new().into_node(), "<hr>")]
	#[case(Div::new().into_node(), "<div></div>")]
	#[case(Li::new().child("x").into_node(), "<li>x")]
	#[case(Html::new().into_node(), "<!DOCTYPE html>")]
	fn test_tag_policy(#[case] node: Node, #[case] expected: &str) {
		assert_eq!(render_to_string(node).unwrap(), expected);
	}

	#[rstest]
	fn test_keyword_fields_render_plain_names() {
		let node = Input::new()
			.type_(InputType::Checkbox)
			.checked(true)
			.readonly(true)
			.name("agree")
			.into_node();
		assert_eq!(
			render_to_string(node).unwrap(),
			"<input checked name=agree readonly type=checkbox>"
		);
		assert_eq!(
			render_to_string(Label::new().for_("agree")).unwrap(),
			"<label for=agree></label>"
		);
		assert_eq!(
			render_to_string(Output::new().for_("a b")).unwrap(),
			"<output for='a b'></output>"
		);

		// Every `_`-suffixed field must carry its HTML name.
		let unrenamed = regex::Regex::new(r"(?m)^\s+([a-z]+_)\s*:").unwrap();
		let missing: Vec<&str> = unrenamed
			.captures_iter(include_str!("elements.rs"))
			.map(|c| c.get(1).unwrap().as_str())
			.collect();
		assert!(missing.is_empty(), "fields without an attribute name: {missing:?}");
	}

	#[rstest]
	fn test_hyphenated_attribute_names() {
		let meta = Meta::new().http_equiv("refresh").content("5");
		let form = Form::new().accept_charset("utf-8").method(Method::Post);
		assert_eq!(
			render_to_string(meta).unwrap(),
			"<meta http-equiv=refresh content=5>"
		);
		assert_eq!(
			render_to_string(form).unwrap(),
			"<form accept-charset=utf-8 method=post></form>"
		);
	}

	#[rstest]
	fn test_meter_value_always_rendered() {
		assert_eq!(render_to_string(Meter::new()).unwrap(), "<meter value=0></meter>");
		assert_eq!(
			render_to_string(Meter::new().value(0.75).max(1.0)).unwrap(),
			"<meter value=0.75 max=1></meter>"
		);
	}

	#[rstest]
	fn test_area_coords() {
		let area = Area::new().shape(Shape::Poly).coords([0, 0, 10, 20]);
		assert_eq!(
			render_to_string(area).unwrap(),
			"<area coords=0,0,10,20 shape=poly>"
		);
	}

	#[rstest]
	fn test_all_tags_on_void_element() {
		let node = Tr::new().child(Td::new().child("a")).into_node();
		assert_eq!(render_to_string(node.clone()).unwrap(), "<tr><td>a");
		assert_eq!(
			render_to_string_with(node, RenderOptions::new().all_tags(true)).unwrap(),
			"<tr><td>a</td></tr>"
		);
	}

	#[rstest]
	fn test_global_after_own_and_data() {
		let img = Img::new()
			.src("a.png")
			.id("logo")
			.data_attr("ratio", "4:3")
			.alt("Logo");
		assert_eq!(
			render_to_string(img).unwrap(),
			"<img alt=Logo src=a.png data-ratio=\"4:3\" id=logo>"
		);
	}

	#[rstest]
	fn test_add_and_set_content() {
		let mut list = Ul::new();
		list.add(Li::new().child("one"));
		list.add(Li::new().child("two"));
		assert_eq!(render_to_string(list.clone()).unwrap(), "<ul><li>one<li>two</ul>");

		list.set_content(["replaced"]);
		assert_eq!(render_to_string(list).unwrap(), "<ul>replaced</ul>");
	}
}
