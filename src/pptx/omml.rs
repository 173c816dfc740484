//! Office Math (OMML) to LaTeX.
//!
//! Equations inserted with the PowerPoint equation editor are stored as
//! `a14:m` blocks holding `m:oMathPara` / `m:oMath` trees. The walker below
//! covers fractions, scripts, radicals, n-ary operators, delimiters,
//! functions, accents, bars, limits, matrices and equation arrays; unknown
//! elements contribute the LaTeX of their children.

use crate::xml::XmlNode;

/// First math root (`m:oMathPara` or `m:oMath`) under a node.
pub fn find_math(node: &XmlNode) -> Option<&XmlNode> {
    if node.is("m:oMathPara") || node.is("m:oMath") {
        return Some(node);
    }
    node.find("m:oMathPara").or_else(|| node.find("m:oMath"))
}

/// Convert an OMML tree to a LaTeX string.
pub fn omml_to_latex(node: &XmlNode) -> String {
    convert(node).trim().to_string()
}

fn convert(node: &XmlNode) -> String {
    match node.local_name() {
        "oMathPara" => node
            .children_named("m:oMath")
            .map(convert)
            .collect::<Vec<_>>()
            .join(" \\\\ "),
        "r" => convert_run(node),
        "f" => convert_fraction(node),
        "sSup" => format!("{}^{{{}}}", base(node), arg(node, "m:sup")),
        "sSub" => format!("{}_{{{}}}", base(node), arg(node, "m:sub")),
        "sSubSup" => format!(
            "{}_{{{}}}^{{{}}}",
            base(node),
            arg(node, "m:sub"),
            arg(node, "m:sup")
        ),
        "sPre" => format!(
            "{{}}_{{{}}}^{{{}}}{}",
            arg(node, "m:sub"),
            arg(node, "m:sup"),
            arg(node, "m:e")
        ),
        "rad" => convert_radical(node),
        "nary" => convert_nary(node),
        "d" => convert_delimiter(node),
        "func" => convert_function(node),
        "acc" => {
            let chr = prop(node, "m:accPr", "m:chr").unwrap_or("\u{0302}");
            format!("{}{{{}}}", accent_command(chr), arg(node, "m:e"))
        }
        "bar" => {
            let command = match prop(node, "m:barPr", "m:pos") {
                Some("top") => "\\overline",
                _ => "\\underline",
            };
            format!("{}{{{}}}", command, arg(node, "m:e"))
        }
        "groupChr" => {
            let chr = prop(node, "m:groupChrPr", "m:chr").unwrap_or("\u{23DF}");
            let command = if chr == "\u{23DE}" {
                "\\overbrace"
            } else {
                "\\underbrace"
            };
            format!("{}{{{}}}", command, arg(node, "m:e"))
        }
        "limLow" => convert_limit(node, "_", "\\underset"),
        "limUpp" => convert_limit(node, "^", "\\overset"),
        "borderBox" => format!("\\boxed{{{}}}", arg(node, "m:e")),
        "m" => {
            let rows: Vec<String> = node
                .children_named("m:mr")
                .map(|row| {
                    row.children_named("m:e")
                        .map(convert)
                        .collect::<Vec<_>>()
                        .join(" & ")
                })
                .collect();
            format!("\\begin{{matrix}}{}\\end{{matrix}}", rows.join(" \\\\ "))
        }
        "eqArr" => {
            let rows: Vec<String> = node.children_named("m:e").map(convert).collect();
            format!("\\begin{{array}}{{l}}{}\\end{{array}}", rows.join(" \\\\ "))
        }
        name if name.ends_with("Pr") => String::new(),
        _ => node.children.iter().map(convert).collect(),
    }
}

/// LaTeX of the first child with `tag`.
fn arg(node: &XmlNode, tag: &str) -> String {
    node.child(tag).map(convert).unwrap_or_default()
}

/// Script base, braced when it is more than one token.
fn base(node: &XmlNode) -> String {
    let e = arg(node, "m:e");
    if e.chars().count() <= 1 || (e.starts_with('\\') && !e[1..].contains(['\\', '{', ' '])) {
        e
    } else {
        format!("{{{}}}", e)
    }
}

/// `m:val` of a property element, e.g. `m:naryPr/m:chr@m:val`.
fn prop<'a>(node: &'a XmlNode, pr: &str, tag: &str) -> Option<&'a str> {
    node.path_attr(&[pr, tag], "m:val")
}

fn convert_run(run: &XmlNode) -> String {
    let text: String = run.children_named("m:t").map(|t| t.text.as_str()).collect();
    let normal = run.path(&["m:rPr", "m:nor"]).is_some();
    if normal {
        return format!("\\text{{{}}}", text);
    }
    escape_math_text(&text)
}

fn convert_fraction(node: &XmlNode) -> String {
    let num = arg(node, "m:num");
    let den = arg(node, "m:den");
    match prop(node, "m:fPr", "m:type") {
        Some("lin") => format!("{}/{}", num, den),
        Some("noBar") => format!("\\genfrac{{}}{{}}{{0pt}}{{}}{{{}}}{{{}}}", num, den),
        _ => format!("\\frac{{{}}}{{{}}}", num, den),
    }
}

fn convert_radical(node: &XmlNode) -> String {
    let degree = arg(node, "m:deg");
    let hidden = prop(node, "m:radPr", "m:degHide").is_some_and(is_on);
    if hidden || degree.is_empty() {
        format!("\\sqrt{{{}}}", arg(node, "m:e"))
    } else {
        format!("\\sqrt[{}]{{{}}}", degree, arg(node, "m:e"))
    }
}

fn convert_nary(node: &XmlNode) -> String {
    let chr = prop(node, "m:naryPr", "m:chr").unwrap_or("\u{222B}");
    let mut out = nary_command(chr).to_string();

    let sub = arg(node, "m:sub");
    if !prop(node, "m:naryPr", "m:subHide").is_some_and(is_on) && !sub.is_empty() {
        out.push_str(&format!("_{{{}}}", sub));
    }
    let sup = arg(node, "m:sup");
    if !prop(node, "m:naryPr", "m:supHide").is_some_and(is_on) && !sup.is_empty() {
        out.push_str(&format!("^{{{}}}", sup));
    }
    let body = arg(node, "m:e");
    if !body.is_empty() {
        out.push(' ');
        out.push_str(&body);
    }
    out
}

fn convert_delimiter(node: &XmlNode) -> String {
    let open = prop(node, "m:dPr", "m:begChr").unwrap_or("(");
    let close = prop(node, "m:dPr", "m:endChr").unwrap_or(")");
    let separator = prop(node, "m:dPr", "m:sepChr").unwrap_or("|");
    let items: Vec<String> = node.children_named("m:e").map(convert).collect();
    format!(
        "\\left{}{}\\right{}",
        fence(open),
        items.join(&escape_math_text(separator)),
        fence(close)
    )
}

fn convert_function(node: &XmlNode) -> String {
    let name = node
        .child("m:fName")
        .map(|f| f.text_content())
        .unwrap_or_default();
    let name = name.trim();
    let head = if FUNCTION_NAMES.contains(&name) {
        format!("\\{}", name)
    } else {
        node.child("m:fName").map(convert).unwrap_or_default()
    };
    format!("{}{{{}}}", head, arg(node, "m:e"))
}

fn convert_limit(node: &XmlNode, script: &str, stack: &str) -> String {
    let base_text = node
        .child("m:e")
        .map(|e| e.text_content())
        .unwrap_or_default();
    let limit = arg(node, "m:lim");
    let base_text = base_text.trim();
    if LIMIT_OPERATORS.contains(&base_text) {
        format!("\\{}{}{{{}}}", base_text, script, limit)
    } else {
        format!("{}{{{}}}{{{}}}", stack, limit, arg(node, "m:e"))
    }
}

fn is_on(value: &str) -> bool {
    matches!(value, "1" | "on" | "true")
}

const FUNCTION_NAMES: &[&str] = &[
    "sin", "cos", "tan", "cot", "sec", "csc", "arcsin", "arccos", "arctan", "sinh", "cosh",
    "tanh", "coth", "log", "ln", "lg", "exp", "lim", "max", "min", "sup", "inf", "det", "gcd",
    "deg", "dim", "ker", "arg",
];

const LIMIT_OPERATORS: &[&str] = &["lim", "max", "min", "sup", "inf", "limsup", "liminf"];

fn nary_command(chr: &str) -> &str {
    match chr {
        "\u{2211}" => "\\sum",
        "\u{220F}" => "\\prod",
        "\u{2210}" => "\\coprod",
        "\u{222B}" => "\\int",
        "\u{222C}" => "\\iint",
        "\u{222D}" => "\\iiint",
        "\u{222E}" => "\\oint",
        "\u{22C3}" => "\\bigcup",
        "\u{22C2}" => "\\bigcap",
        "\u{22C1}" => "\\bigvee",
        "\u{22C0}" => "\\bigwedge",
        other => other,
    }
}

fn accent_command(chr: &str) -> &'static str {
    match chr {
        "\u{0303}" | "~" => "\\tilde",
        "\u{0307}" => "\\dot",
        "\u{0308}" => "\\ddot",
        "\u{20D7}" | "\u{2192}" => "\\vec",
        "\u{0304}" | "\u{00AF}" | "\u{0305}" => "\\bar",
        "\u{0301}" => "\\acute",
        "\u{0300}" => "\\grave",
        "\u{0306}" => "\\breve",
        "\u{030C}" => "\\check",
        _ => "\\hat",
    }
}

fn fence(chr: &str) -> String {
    match chr {
        "" => ".".to_string(),
        "{" => "\\{".to_string(),
        "}" => "\\}".to_string(),
        "\u{2016}" => "\\|".to_string(),
        "\u{27E8}" | "\u{2329}" => "\\langle".to_string(),
        "\u{27E9}" | "\u{232A}" => "\\rangle".to_string(),
        "\u{230A}" => "\\lfloor".to_string(),
        "\u{230B}" => "\\rfloor".to_string(),
        "\u{2308}" => "\\lceil".to_string(),
        "\u{2309}" => "\\rceil".to_string(),
        other => other.to_string(),
    }
}

fn symbol(c: char) -> Option<&'static str> {
    Some(match c {
        'α' => "\\alpha",
        'β' => "\\beta",
        'γ' => "\\gamma",
        'δ' => "\\delta",
        'ε' => "\\epsilon",
        'ϵ' => "\\epsilon",
        'ζ' => "\\zeta",
        'η' => "\\eta",
        'θ' => "\\theta",
        'ι' => "\\iota",
        'κ' => "\\kappa",
        'λ' => "\\lambda",
        'μ' => "\\mu",
        'ν' => "\\nu",
        'ξ' => "\\xi",
        'π' => "\\pi",
        'ρ' => "\\rho",
        'σ' => "\\sigma",
        'τ' => "\\tau",
        'υ' => "\\upsilon",
        'φ' => "\\phi",
        'χ' => "\\chi",
        'ψ' => "\\psi",
        'ω' => "\\omega",
        'Γ' => "\\Gamma",
        'Δ' => "\\Delta",
        'Θ' => "\\Theta",
        'Λ' => "\\Lambda",
        'Ξ' => "\\Xi",
        'Π' => "\\Pi",
        'Σ' => "\\Sigma",
        'Υ' => "\\Upsilon",
        'Φ' => "\\Phi",
        'Ψ' => "\\Psi",
        'Ω' => "\\Omega",
        '±' => "\\pm",
        '∓' => "\\mp",
        '×' => "\\times",
        '÷' => "\\div",
        '⋅' | '·' => "\\cdot",
        '∗' => "\\ast",
        '∘' => "\\circ",
        '≠' => "\\neq",
        '≤' => "\\leq",
        '≥' => "\\geq",
        '≪' => "\\ll",
        '≫' => "\\gg",
        '≈' => "\\approx",
        '≡' => "\\equiv",
        '≅' => "\\cong",
        '∼' => "\\sim",
        '∝' => "\\propto",
        '∞' => "\\infty",
        '∂' => "\\partial",
        '∇' => "\\nabla",
        '∈' => "\\in",
        '∉' => "\\notin",
        '∋' => "\\ni",
        '⊂' => "\\subset",
        '⊃' => "\\supset",
        '⊆' => "\\subseteq",
        '⊇' => "\\supseteq",
        '∪' => "\\cup",
        '∩' => "\\cap",
        '∅' => "\\emptyset",
        '∀' => "\\forall",
        '∃' => "\\exists",
        '¬' => "\\neg",
        '∧' => "\\wedge",
        '∨' => "\\vee",
        '→' => "\\rightarrow",
        '←' => "\\leftarrow",
        '↔' => "\\leftrightarrow",
        '⇒' => "\\Rightarrow",
        '⇐' => "\\Leftarrow",
        '⇔' => "\\Leftrightarrow",
        '↦' => "\\mapsto",
        '∠' => "\\angle",
        '⊥' => "\\perp",
        '∥' => "\\parallel",
        '…' => "\\ldots",
        '⋯' => "\\cdots",
        '⋮' => "\\vdots",
        '⋱' => "\\ddots",
        '′' => "'",
        '″' => "''",
        'ℏ' => "\\hbar",
        'ℓ' => "\\ell",
        'ℝ' => "\\mathbb{R}",
        'ℕ' => "\\mathbb{N}",
        'ℤ' => "\\mathbb{Z}",
        'ℚ' => "\\mathbb{Q}",
        'ℂ' => "\\mathbb{C}",
        '√' => "\\surd",
        '°' => "^{\\circ}",
        '{' => "\\{",
        '}' => "\\}",
        '%' => "\\%",
        '#' => "\\#",
        '&' => "\\&",
        '$' => "\\$",
        '_' => "\\_",
        '\\' => "\\backslash",
        _ => return None,
    })
}

/// Map math text to LaTeX, separating control words from following letters.
fn escape_math_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut after_command = false;
    for c in text.chars() {
        match symbol(c) {
            Some(latex) => {
                if after_command && latex.starts_with(|ch: char| ch.is_ascii_alphabetic()) {
                    out.push(' ');
                }
                out.push_str(latex);
                after_command = latex.starts_with('\\')
                    && latex.ends_with(|ch: char| ch.is_ascii_alphabetic());
            }
            None => {
                if after_command && c.is_ascii_alphabetic() {
                    out.push(' ');
                }
                out.push(c);
                after_command = false;
            }
        }
    }
    out
}
