//! Preset geometry templates.
//!
//! Each template is an SVG path over the shape's own box with `{name}` or
//! `{name*factor}` placeholders. The names are the values computed by
//! [`super::PathParams`].

pub(crate) static PRESET_TEMPLATES: &[(&str, &str)] = &[
    ("rect", "M0,0 L{w},0 L{w},{h} L0,{h} Z"),
    ("roundRect", "M{r},0 L{wr},0 Q{w},0 {w},{r} L{w},{hr} Q{w},{h} {wr},{h} L{r},{h} Q0,{h} 0,{hr} L0,{r} Q0,0 {r},0 Z"),
    ("round1Rect", "M0,0 L{wr},0 Q{w},0 {w},{r} L{w},{h} L0,{h} Z"),
    ("round2SameRect", "M{r},0 L{wr},0 Q{w},0 {w},{r} L{w},{h} L0,{h} L0,{r} Q0,0 {r},0 Z"),
    ("round2DiagRect", "M{r},0 L{w},0 L{w},{hr} Q{w},{h} {wr},{h} L0,{h} L0,{r} Q0,0 {r},0 Z"),
    ("snip1Rect", "M0,0 L{wr},0 L{w},{r} L{w},{h} L0,{h} Z"),
    ("snip2SameRect", "M{r},0 L{wr},0 L{w},{r} L{w},{h} L0,{h} L0,{r} Z"),
    ("snip2DiagRect", "M{r},0 L{w},0 L{w},{hr} L{wr},{h} L0,{h} L0,{r} Z"),
    ("snipRoundRect", "M{r},0 L{wr},0 L{w},{r} L{w},{h} L0,{h} L0,{r} Q0,0 {r},0 Z"),
    ("ellipse", "M0,{cy} A{rx},{ry} 0 1,0 {w},{cy} A{rx},{ry} 0 1,0 0,{cy} Z"),
    ("triangle", "M{w2},0 L{w},{h} L0,{h} Z"),
    ("rtTriangle", "M0,0 L{w},{h} L0,{h} Z"),
    ("parallelogram", "M{aw},0 L{w},0 L{waw},{h} L0,{h} Z"),
    ("trapezoid", "M0,{h} L{aw},0 L{waw},0 L{w},{h} Z"),
    ("diamond", "M{w2},0 L{w},{h2} L{w2},{h} L0,{h2} Z"),
    ("pentagon", "M{w*0.5},0 L{w},{h*0.382} L{w*0.809},{h} L{w*0.191},{h} L0,{h*0.382} Z"),
    ("hexagon", "M{aw},0 L{waw},0 L{w},{h2} L{waw},{h} L{aw},{h} L0,{h2} Z"),
    ("heptagon", "M{w*0.5},0 L{w*0.901},{h*0.1981} L{w},{h*0.6431} L{w*0.7225},{h} L{w*0.2775},{h} L0,{h*0.6431} L{w*0.099},{h*0.1981} Z"),
    ("octagon", "M{aw},0 L{waw},0 L{w},{ah} L{w},{hah} L{waw},{h} L{aw},{h} L0,{hah} L0,{ah} Z"),
    ("decagon", "M{w*0.5},0 L{w*0.809},{h*0.0955} L{w},{h*0.3455} L{w},{h*0.6545} L{w*0.809},{h*0.9045} L{w*0.5},{h} L{w*0.191},{h*0.9045} L0,{h*0.6545} L0,{h*0.3455} L{w*0.191},{h*0.0955} Z"),
    ("dodecagon", "M{w*0.5},0 L{w*0.75},{h*0.067} L{w*0.933},{h*0.25} L{w},{h*0.5} L{w*0.933},{h*0.75} L{w*0.75},{h*0.933} L{w*0.5},{h} L{w*0.25},{h*0.933} L{w*0.067},{h*0.75} L0,{h*0.5} L{w*0.067},{h*0.25} L{w*0.25},{h*0.067} Z"),
    ("plus", "M{aw},0 L{waw},0 L{waw},{ah} L{w},{ah} L{w},{hah} L{waw},{hah} L{waw},{h} L{aw},{h} L{aw},{hah} L0,{hah} L0,{ah} L{aw},{ah} Z"),
    ("donut", "M0,{cy} A{rx},{ry} 0 1,0 {w},{cy} A{rx},{ry} 0 1,0 0,{cy} Z M{t},{cy} A{irx},{iry} 0 1,1 {wt},{cy} A{irx},{iry} 0 1,1 {t},{cy} Z"),
    ("noSmoking", "M0,{cy} A{rx},{ry} 0 1,0 {w},{cy} A{rx},{ry} 0 1,0 0,{cy} Z M{t},{cy} A{irx},{iry} 0 1,1 {wt},{cy} A{irx},{iry} 0 1,1 {t},{cy} Z M{w*0.25},{h*0.18} L{w*0.82},{h*0.75} L{w*0.75},{h*0.82} L{w*0.18},{h*0.25} Z"),
    ("blockArc", "M0,{cy} A{rx},{ry} 0 0,1 {w},{cy} L{wt},{cy} A{irx},{iry} 0 0,0 {t},{cy} Z"),
    ("arc", "M{w2},0 A{rx},{ry} 0 0,1 {w},{cy}"),
    ("pie", "M{cx},{cy} L{w},{cy} A{rx},{ry} 0 1,1 {cx},0 Z"),
    ("chord", "M{w*0.8536},{h*0.8536} A{rx},{ry} 0 1,1 {w*0.8536},{h*0.1464} Z"),
    ("can", "M0,{hd} A{rx},{hd} 0 0,1 {w},{hd} L{w},{hs} A{rx},{hd} 0 0,1 0,{hs} Z M0,{hd} A{rx},{hd} 0 0,0 {w},{hd}"),
    ("cube", "M0,{ah} L{aw},0 L{w},0 L{w},{hah} L{waw},{h} L0,{h} Z M0,{ah} L{waw},{ah} L{w},0 M{waw},{ah} L{waw},{h}"),
    ("bevel", "M0,0 L{w},0 L{w},{h} L0,{h} Z M{wd},{hd} L{ws},{hd} L{ws},{hs} L{wd},{hs} Z"),
    ("frame", "M0,0 L{w},0 L{w},{h} L0,{h} Z M{wd},{hd} L{wd},{hs} L{ws},{hs} L{ws},{hd} Z"),
    ("halfFrame", "M0,0 L{w},0 L{ws},{hd} L{wd},{hd} L{wd},{hs} L0,{h} Z"),
    ("corner", "M0,0 L{aw},0 L{aw},{hah} L{w},{hah} L{w},{h} L0,{h} Z"),
    ("diagStripe", "M0,{h2} L{w2},0 L{w},0 L0,{h} Z"),
    ("plaque", "M{r},0 L{wr},0 Q{wr},{r} {w},{r} L{w},{hr} Q{wr},{hr} {wr},{h} L{r},{h} Q{r},{hr} 0,{hr} L0,{r} Q{r},{r} {r},0 Z"),
    ("foldedCorner", "M0,0 L{w},0 L{w},{hs} L{ws},{h} L0,{h} Z M{ws},{h} L{ws},{hs} L{w},{hs}"),
    ("teardrop", "M{w2},0 L{w},0 L{w},{h2} A{rx},{ry} 0 1,1 {w2},0 Z"),
    ("heart", "M{w2},{h*0.25} C{w2},{h*0.1} {w*0.35},0 {w*0.25},0 C{w*0.05},0 0,{h*0.2} 0,{h*0.35} C0,{h*0.6} {w*0.3},{h*0.8} {w2},{h} C{w*0.7},{h*0.8} {w},{h*0.6} {w},{h*0.35} C{w},{h*0.2} {w*0.95},0 {w*0.75},0 C{w*0.65},0 {w2},{h*0.1} {w2},{h*0.25} Z"),
    ("lightningBolt", "M{w*0.3922},0 L{w*0.5954},{h*0.2815} L{w*0.5116},{h*0.3147} L{w*0.7675},{h*0.5559} L{w*0.6837},{h*0.5962} L{w},{h} L{w*0.4635},{h*0.6905} L{w*0.5658},{h*0.6475} L{w*0.2325},{h*0.4493} L{w*0.3519},{h*0.3881} L0,{h*0.1801} Z"),
    ("sun", "M{w*0.25},{cy} A{w*0.25},{h*0.25} 0 1,0 {w*0.75},{cy} A{w*0.25},{h*0.25} 0 1,0 {w*0.25},{cy} Z M{w*0.8136},{h*0.4364} L{w},{h*0.5} L{w*0.8136},{h*0.5636} Z M{w*0.7667},{h*0.6768} L{w*0.8536},{h*0.8536} L{w*0.6768},{h*0.7667} Z M{w*0.5636},{h*0.8136} L{w*0.5},{h} L{w*0.4364},{h*0.8136} Z M{w*0.3232},{h*0.7667} L{w*0.1464},{h*0.8536} L{w*0.2333},{h*0.6768} Z M{w*0.1864},{h*0.5636} L0,{h*0.5} L{w*0.1864},{h*0.4364} Z M{w*0.2333},{h*0.3232} L{w*0.1464},{h*0.1464} L{w*0.3232},{h*0.2333} Z M{w*0.4364},{h*0.1864} L{w*0.5},0 L{w*0.5636},{h*0.1864} Z M{w*0.6768},{h*0.2333} L{w*0.8536},{h*0.1464} L{w*0.7667},{h*0.3232} Z"),
    ("moon", "M{w},0 A{w},{h2} 0 0,0 {w},{h} A{waw},{h2} 0 0,1 {w},0 Z"),
    ("smileyFace", "M0,{cy} A{rx},{ry} 0 1,0 {w},{cy} A{rx},{ry} 0 1,0 0,{cy} Z M{w*0.3},{h*0.35} A{w*0.05},{h*0.05} 0 1,0 {w*0.4},{h*0.35} A{w*0.05},{h*0.05} 0 1,0 {w*0.3},{h*0.35} Z M{w*0.6},{h*0.35} A{w*0.05},{h*0.05} 0 1,0 {w*0.7},{h*0.35} A{w*0.05},{h*0.05} 0 1,0 {w*0.6},{h*0.35} Z M{w*0.3},{h*0.68} Q{w2},{h*0.85} {w*0.7},{h*0.68}"),
    ("wave", "M0,{hd} Q{w*0.25},{h*0.3} {w2},{hd} T{w},{hd} L{w},{hs} Q{w*0.75},{h*0.7} {w2},{hs} T0,{hs} Z"),
    ("doubleWave", "M0,{hd} Q{w*0.125},{h*0.3} {w*0.25},{hd} T{w2},{hd} T{w*0.75},{hd} T{w},{hd} L{w},{hs} Q{w*0.875},{h*0.7} {w*0.75},{hs} T{w2},{hs} T{w*0.25},{hs} T0,{hs} Z"),
    ("cloud", "M{w*0.5},{h*0.1} A{w*0.13},{h*0.13} 0 0,1 {w*0.7351},{h*0.1764} A{w*0.13},{h*0.13} 0 0,1 {w*0.8804},{h*0.3764} A{w*0.13},{h*0.13} 0 0,1 {w*0.8804},{h*0.6236} A{w*0.13},{h*0.13} 0 0,1 {w*0.7351},{h*0.8236} A{w*0.13},{h*0.13} 0 0,1 {w*0.5},{h*0.9} A{w*0.13},{h*0.13} 0 0,1 {w*0.2649},{h*0.8236} A{w*0.13},{h*0.13} 0 0,1 {w*0.1196},{h*0.6236} A{w*0.13},{h*0.13} 0 0,1 {w*0.1196},{h*0.3764} A{w*0.13},{h*0.13} 0 0,1 {w*0.2649},{h*0.1764} A{w*0.13},{h*0.13} 0 0,1 {w*0.5},{h*0.1} Z"),
    ("irregularSeal1", "M{w*0.5},{h*0.2685} L{w*0.6723},0 L{w*0.6553},{h*0.2465} L{w*0.8509},{h*0.2063} L{w*0.7732},{h*0.3387} L{w*0.9767},{h*0.3767} L{w*0.8151},{h*0.485} L{w},{h*0.6153} L{w*0.7795},{h*0.5992} L{w*0.84},{h*0.8377} L{w*0.6491},{h*0.6693} L{w*0.6133},{h*0.9137} L{w*0.4876},{h*0.6914} L{w*0.3928},{h} L{w*0.3572},{h*0.7235} L{w*0.2205},{h*0.8156} L{w*0.2624},{h*0.6452} L{w*0.0063},{h*0.6753} L{w*0.1723},{h*0.5451} L0,{h*0.3988} L{w*0.2142},{h*0.3526} L{w*0.0171},{h*0.1062} L{w*0.3385},{h*0.2926} L{w*0.3867},{h*0.1062} Z"),
    ("irregularSeal2", "M{w*0.5306},{h*0.201} L{w*0.6847},0 L{w*0.6725},{h*0.2675} L{w*0.8337},{h*0.1469} L{w*0.7583},{h*0.3024} L{w},{h*0.3076} L{w*0.7863},{h*0.4353} L{w*0.8458},{h*0.5227} L{w*0.7583},{h*0.5699} L{w*0.8739},{h*0.7237} L{w*0.6778},{h*0.6644} L{w*0.6918},{h*0.8042} L{w*0.5639},{h*0.7377} L{w*0.5376},{h*0.8723} L{w*0.457},{h*0.8042} L{w*0.4028},{h*0.9126} L{w*0.3485},{h*0.8391} L{w*0.2276},{h} L{w*0.2225},{h*0.8444} L{w*0.0595},{h*0.8252} L{w*0.1542},{h*0.7116} L0,{h*0.5962} L{w*0.1822},{h*0.5367} L{w*0.0543},{h*0.3829} L{w*0.2487},{h*0.3619} L{w*0.2084},{h*0.1678} L{w*0.3958},{h*0.2955} L{w*0.4501},{h*0.0874} Z"),
    ("line", "M0,0 L{w},{h}"),
    ("straightConnector1", "M0,0 L{w},{h}"),
    ("rightArrow", "M0,{h*0.25} L{waw},{h*0.25} L{waw},0 L{w},{h2} L{waw},{h} L{waw},{h*0.75} L0,{h*0.75} Z"),
    ("leftArrow", "M{w},{h*0.25} L{aw},{h*0.25} L{aw},0 L0,{h2} L{aw},{h} L{aw},{h*0.75} L{w},{h*0.75} Z"),
    ("upArrow", "M{w*0.25},{h} L{w*0.25},{ah} L0,{ah} L{w2},0 L{w},{ah} L{w*0.75},{ah} L{w*0.75},{h} Z"),
    ("downArrow", "M{w*0.25},0 L{w*0.75},0 L{w*0.75},{hah} L{w},{hah} L{w2},{h} L0,{hah} L{w*0.25},{hah} Z"),
    ("leftRightArrow", "M0,{h2} L{aw},0 L{aw},{h*0.25} L{waw},{h*0.25} L{waw},0 L{w},{h2} L{waw},{h} L{waw},{h*0.75} L{aw},{h*0.75} L{aw},{h} Z"),
    ("upDownArrow", "M{w2},0 L{w},{ah} L{w*0.75},{ah} L{w*0.75},{hah} L{w},{hah} L{w2},{h} L0,{hah} L{w*0.25},{hah} L{w*0.25},{ah} L0,{ah} Z"),
    ("quadArrow", "M{w*0.5},0 L{w*0.65},{h*0.15} L{w*0.575},{h*0.15} L{w*0.575},{h*0.425} L{w*0.85},{h*0.425} L{w*0.85},{h*0.35} L{w},{h*0.5} L{w*0.85},{h*0.65} L{w*0.85},{h*0.575} L{w*0.575},{h*0.575} L{w*0.575},{h*0.85} L{w*0.65},{h*0.85} L{w*0.5},{h} L{w*0.35},{h*0.85} L{w*0.425},{h*0.85} L{w*0.425},{h*0.575} L{w*0.15},{h*0.575} L{w*0.15},{h*0.65} L0,{h*0.5} L{w*0.15},{h*0.35} L{w*0.15},{h*0.425} L{w*0.425},{h*0.425} L{w*0.425},{h*0.15} L{w*0.35},{h*0.15} Z"),
    ("notchedRightArrow", "M0,{h*0.25} L{waw},{h*0.25} L{waw},0 L{w},{h2} L{waw},{h} L{waw},{h*0.75} L0,{h*0.75} L{wd},{h2} Z"),
    ("stripedRightArrow", "M0,{h*0.25} L{w*0.04},{h*0.25} L{w*0.04},{h*0.75} L0,{h*0.75} Z M{w*0.08},{h*0.25} L{w*0.12},{h*0.25} L{w*0.12},{h*0.75} L{w*0.08},{h*0.75} Z M{w*0.16},{h*0.25} L{waw},{h*0.25} L{waw},0 L{w},{h2} L{waw},{h} L{waw},{h*0.75} L{w*0.16},{h*0.75} Z"),
    ("chevron", "M0,0 L{waw},0 L{w},{h2} L{waw},{h} L0,{h} L{aw},{h2} Z"),
    ("homePlate", "M0,0 L{waw},0 L{w},{h2} L{waw},{h} L0,{h} Z"),
    ("bentArrow", "M0,{h} L0,{h*0.4} Q0,{h*0.2} {w*0.2},{h*0.2} L{w*0.75},{h*0.2} L{w*0.75},0 L{w},{h*0.325} L{w*0.75},{h*0.65} L{w*0.75},{h*0.45} L{w*0.3},{h*0.45} Q{w*0.25},{h*0.45} {w*0.25},{h*0.5} L{w*0.25},{h} Z"),
    ("bentUpArrow", "M0,{h*0.75} L{w*0.6},{h*0.75} L{w*0.6},{h*0.25} L{w*0.45},{h*0.25} L{w*0.725},0 L{w},{h*0.25} L{w*0.85},{h*0.25} L{w*0.85},{h} L0,{h} Z"),
    ("uturnArrow", "M0,{h} L0,{h*0.35} A{w*0.35},{h*0.35} 0 0,1 {w*0.7},{h*0.35} L{w*0.7},{h*0.55} L{w*0.85},{h*0.55} L{w*0.6},{h*0.8} L{w*0.35},{h*0.55} L{w*0.5},{h*0.55} L{w*0.5},{h*0.35} A{w*0.15},{h*0.15} 0 0,0 {w*0.2},{h*0.35} L{w*0.2},{h} Z"),
    ("circularArrow", "M{w*0.1},{h2} A{w*0.4},{h*0.4} 0 1,1 {w*0.9},{h2} L{w},{h2} L{w*0.8},{h*0.7} L{w*0.6},{h2} L{w*0.7},{h2} A{w*0.2},{h*0.2} 0 1,0 {w*0.3},{h2} Z"),
    ("rightArrowCallout", "M0,0 L{w*0.6},0 L{w*0.6},{h*0.35} L{w*0.8},{h*0.35} L{w*0.8},{h*0.2} L{w},{h*0.5} L{w*0.8},{h*0.8} L{w*0.8},{h*0.65} L{w*0.6},{h*0.65} L{w*0.6},{h} L0,{h} Z"),
    ("leftArrowCallout", "M{w},0 L{w*0.4},0 L{w*0.4},{h*0.35} L{w*0.2},{h*0.35} L{w*0.2},{h*0.2} L0,{h*0.5} L{w*0.2},{h*0.8} L{w*0.2},{h*0.65} L{w*0.4},{h*0.65} L{w*0.4},{h} L{w},{h} Z"),
    ("upArrowCallout", "M0,{h} L0,{h*0.4} L{w*0.35},{h*0.4} L{w*0.35},{h*0.2} L{w*0.2},{h*0.2} L{w*0.5},0 L{w*0.8},{h*0.2} L{w*0.65},{h*0.2} L{w*0.65},{h*0.4} L{w},{h*0.4} L{w},{h} Z"),
    ("downArrowCallout", "M0,0 L{w},0 L{w},{h*0.6} L{w*0.65},{h*0.6} L{w*0.65},{h*0.8} L{w*0.8},{h*0.8} L{w*0.5},{h} L{w*0.2},{h*0.8} L{w*0.35},{h*0.8} L{w*0.35},{h*0.6} L0,{h*0.6} Z"),
    ("wedgeRectCallout", "M0,0 L{w},0 L{w},{h*0.8} L{w*0.35},{h*0.8} L{w*0.2},{h} L{w*0.2},{h*0.8} L0,{h*0.8} Z"),
    ("wedgeRoundRectCallout", "M{r},0 L{wr},0 Q{w},0 {w},{r} L{w},{h*0.7} Q{w},{h*0.8} {ws},{h*0.8} L{w*0.35},{h*0.8} L{w*0.2},{h} L{w*0.2},{h*0.8} L{wd},{h*0.8} Q0,{h*0.8} 0,{h*0.7} L0,{r} Q0,0 {r},0 Z"),
    ("wedgeEllipseCallout", "M{w*0.15},{h*0.6857} A{rx},{h*0.4} 0 1,1 {w*0.35},{h*0.7816} L{w*0.2},{h} Z"),
    ("cloudCallout", "M{w*0.5},{h*0.1} A{w*0.13},{h*0.13} 0 0,1 {w*0.7351},{h*0.1764} A{w*0.13},{h*0.13} 0 0,1 {w*0.8804},{h*0.3764} A{w*0.13},{h*0.13} 0 0,1 {w*0.8804},{h*0.6236} A{w*0.13},{h*0.13} 0 0,1 {w*0.7351},{h*0.8236} A{w*0.13},{h*0.13} 0 0,1 {w*0.5},{h*0.9} A{w*0.13},{h*0.13} 0 0,1 {w*0.2649},{h*0.8236} A{w*0.13},{h*0.13} 0 0,1 {w*0.1196},{h*0.6236} A{w*0.13},{h*0.13} 0 0,1 {w*0.1196},{h*0.3764} A{w*0.13},{h*0.13} 0 0,1 {w*0.2649},{h*0.1764} A{w*0.13},{h*0.13} 0 0,1 {w*0.5},{h*0.1} Z M{w*0.2},{h*0.86} A{w*0.04},{h*0.04} 0 1,0 {w*0.28},{h*0.86} A{w*0.04},{h*0.04} 0 1,0 {w*0.2},{h*0.86} Z M{w*0.1},{h*0.95} A{w*0.025},{h*0.025} 0 1,0 {w*0.15},{h*0.95} A{w*0.025},{h*0.025} 0 1,0 {w*0.1},{h*0.95} Z"),
    ("borderCallout1", "M0,0 L{w},0 L{w},{h*0.8} L0,{h*0.8} Z M{w*0.2},{h*0.8} L{wd},{h}"),
    ("callout1", "M0,0 L{w},0 L{w},{h*0.8} L0,{h*0.8} Z M{w*0.2},{h*0.8} L{wd},{h}"),
    ("accentCallout1", "M0,0 L{w},0 L{w},{h*0.8} L0,{h*0.8} Z M{w*0.04},0 L{w*0.04},{h*0.8} M{w*0.04},{h*0.4} L0,{h}"),
    ("flowChartProcess", "M0,0 L{w},0 L{w},{h} L0,{h} Z"),
    ("flowChartAlternateProcess", "M{r},0 L{wr},0 Q{w},0 {w},{r} L{w},{hr} Q{w},{h} {wr},{h} L{r},{h} Q0,{h} 0,{hr} L0,{r} Q0,0 {r},0 Z"),
    ("flowChartDecision", "M{w2},0 L{w},{h2} L{w2},{h} L0,{h2} Z"),
    ("flowChartInputOutput", "M{w*0.2},0 L{w},0 L{w*0.8},{h} L0,{h} Z"),
    ("flowChartPredefinedProcess", "M0,0 L{w},0 L{w},{h} L0,{h} Z M{w*0.125},0 L{w*0.125},{h} M{w*0.875},0 L{w*0.875},{h}"),
    ("flowChartInternalStorage", "M0,0 L{w},0 L{w},{h} L0,{h} Z M{w*0.125},0 L{w*0.125},{h} M0,{h*0.125} L{w},{h*0.125}"),
    ("flowChartDocument", "M0,0 L{w},0 L{w},{h*0.83} C{w*0.75},{h*0.7} {w*0.5},{h} 0,{h*0.9} Z"),
    ("flowChartMultidocument", "M0,{h*0.2} L{w*0.8},{h*0.2} L{w*0.8},{h*0.86} C{w*0.6},{h*0.76} {w*0.4},{h} 0,{h*0.92} Z M{w*0.1},{h*0.2} L{w*0.1},{h*0.1} L{w*0.9},{h*0.1} L{w*0.9},{h*0.76} L{w*0.8},{h*0.76} M{w*0.2},{h*0.1} L{w*0.2},0 L{w},0 L{w},{h*0.66} L{w*0.9},{h*0.66}"),
    ("flowChartTerminator", "M{w*0.16},0 L{w*0.84},0 A{w*0.16},{h2} 0 0,1 {w*0.84},{h} L{w*0.16},{h} A{w*0.16},{h2} 0 0,1 {w*0.16},0 Z"),
    ("flowChartPreparation", "M{w*0.2},0 L{w*0.8},0 L{w},{h*0.5} L{w*0.8},{h} L{w*0.2},{h} L0,{h*0.5} Z"),
    ("flowChartManualInput", "M0,{h*0.2} L{w},0 L{w},{h} L0,{h} Z"),
    ("flowChartManualOperation", "M0,0 L{w},0 L{w*0.8},{h} L{w*0.2},{h} Z"),
    ("flowChartConnector", "M0,{cy} A{rx},{ry} 0 1,0 {w},{cy} A{rx},{ry} 0 1,0 0,{cy} Z"),
    ("flowChartOffpageConnector", "M0,0 L{w},0 L{w},{h*0.8} L{w2},{h} L0,{h*0.8} Z"),
    ("flowChartPunchedCard", "M{w*0.2},0 L{w},0 L{w},{h} L0,{h} L0,{h*0.2} Z"),
    ("flowChartPunchedTape", "M0,{hd} Q{w*0.25},{h*0.3} {w2},{hd} T{w},{hd} L{w},{hs} Q{w*0.75},{h*0.7} {w2},{hs} T0,{hs} Z"),
    ("flowChartSummingJunction", "M0,{cy} A{rx},{ry} 0 1,0 {w},{cy} A{rx},{ry} 0 1,0 0,{cy} Z M{w*0.1464},{h*0.1464} L{w*0.8536},{h*0.8536} M{w*0.8536},{h*0.1464} L{w*0.1464},{h*0.8536}"),
    ("flowChartOr", "M0,{cy} A{rx},{ry} 0 1,0 {w},{cy} A{rx},{ry} 0 1,0 0,{cy} Z M{w2},0 L{w2},{h} M0,{h2} L{w},{h2}"),
    ("flowChartCollate", "M0,0 L{w},0 L0,{h} L{w},{h} Z"),
    ("flowChartSort", "M{w2},0 L{w},{h2} L{w2},{h} L0,{h2} Z M0,{h2} L{w},{h2}"),
    ("flowChartExtract", "M{w2},0 L{w},{h} L0,{h} Z"),
    ("flowChartMerge", "M0,0 L{w},0 L{w2},{h} Z"),
    ("flowChartOnlineStorage", "M{w*0.17},0 L{w},0 A{w*0.17},{h2} 0 0,0 {w},{h} L{w*0.17},{h} A{w*0.17},{h2} 0 0,1 {w*0.17},0 Z"),
    ("flowChartDelay", "M0,0 L{w2},0 A{w2},{h2} 0 0,1 {w2},{h} L0,{h} Z"),
    ("flowChartMagneticDisk", "M0,{hd} A{rx},{hd} 0 0,1 {w},{hd} L{w},{hs} A{rx},{hd} 0 0,1 0,{hs} Z M0,{hd} A{rx},{hd} 0 0,0 {w},{hd}"),
    ("flowChartMagneticDrum", "M{w*0.17},0 L{w*0.83},0 A{w*0.17},{h2} 0 0,1 {w*0.83},{h} L{w*0.17},{h} A{w*0.17},{h2} 0 0,1 {w*0.17},0 Z M{w*0.83},0 A{w*0.17},{h2} 0 0,0 {w*0.83},{h}"),
    ("flowChartMagneticTape", "M0,{cy} A{rx},{ry} 0 1,0 {w},{cy} A{rx},{ry} 0 1,0 0,{cy} Z M{cx},{h} L{w},{h} L{w},{h*0.85}"),
    ("flowChartDisplay", "M0,{h2} L{w*0.17},0 L{w*0.83},0 A{w*0.17},{h2} 0 0,1 {w*0.83},{h} L{w*0.17},{h} Z"),
    ("flowChartOfflineStorage", "M0,0 L{w},0 L{w2},{h} Z M{w*0.4},{h*0.8} L{w*0.6},{h*0.8}"),
    ("star4", "M{w*0.5},0 L{w*0.5884},{h*0.4116} L{w},{h*0.5} L{w*0.5884},{h*0.5884} L{w*0.5},{h} L{w*0.4116},{h*0.5884} L0,{h*0.5} L{w*0.4116},{h*0.4116} Z"),
    ("star5", "M{w*0.5},0 L{w*0.6123},{h*0.3455} L{w*0.9755},{h*0.3455} L{w*0.6817},{h*0.559} L{w*0.7939},{h*0.9045} L{w*0.5},{h*0.691} L{w*0.2061},{h*0.9045} L{w*0.3183},{h*0.559} L{w*0.0245},{h*0.3455} L{w*0.3877},{h*0.3455} Z"),
    ("star6", "M{w*0.5},0 L{w*0.6443},{h*0.25} L{w*0.933},{h*0.25} L{w*0.7887},{h*0.5} L{w*0.933},{h*0.75} L{w*0.6443},{h*0.75} L{w*0.5},{h} L{w*0.3557},{h*0.75} L{w*0.067},{h*0.75} L{w*0.2113},{h*0.5} L{w*0.067},{h*0.25} L{w*0.3556},{h*0.25} Z"),
    ("star7", "M{w*0.5},0 L{w*0.6501},{h*0.1883} L{w*0.8909},{h*0.1883} L{w*0.8373},{h*0.423} L{w*0.9875},{h*0.6113} L{w*0.7705},{h*0.7157} L{w*0.7169},{h*0.9505} L{w*0.5},{h*0.846} L{w*0.2831},{h*0.9505} L{w*0.2295},{h*0.7157} L{w*0.0125},{h*0.6113} L{w*0.1627},{h*0.423} L{w*0.1091},{h*0.1883} L{w*0.3499},{h*0.1883} Z"),
    ("star8", "M{w*0.5},0 L{w*0.6435},{h*0.1535} L{w*0.8536},{h*0.1464} L{w*0.8465},{h*0.3565} L{w},{h*0.5} L{w*0.8465},{h*0.6435} L{w*0.8536},{h*0.8536} L{w*0.6435},{h*0.8465} L{w*0.5},{h} L{w*0.3565},{h*0.8465} L{w*0.1464},{h*0.8536} L{w*0.1535},{h*0.6435} L0,{h*0.5} L{w*0.1535},{h*0.3565} L{w*0.1464},{h*0.1464} L{w*0.3565},{h*0.1535} Z"),
    ("star10", "M{w*0.5},0 L{w*0.6313},{h*0.0958} L{w*0.7939},{h*0.0955} L{w*0.8438},{h*0.2502} L{w*0.9755},{h*0.3455} L{w*0.925},{h*0.5} L{w*0.9755},{h*0.6545} L{w*0.8438},{h*0.7498} L{w*0.7939},{h*0.9045} L{w*0.6313},{h*0.9042} L{w*0.5},{h} L{w*0.3687},{h*0.9042} L{w*0.2061},{h*0.9045} L{w*0.1562},{h*0.7498} L{w*0.0245},{h*0.6545} L{w*0.075},{h*0.5} L{w*0.0245},{h*0.3455} L{w*0.1562},{h*0.2502} L{w*0.2061},{h*0.0955} L{w*0.3687},{h*0.0958} Z"),
    ("star12", "M{w*0.5},0 L{w*0.5971},{h*0.1378} L{w*0.75},{h*0.067} L{w*0.7652},{h*0.2348} L{w*0.933},{h*0.25} L{w*0.8622},{h*0.4029} L{w},{h*0.5} L{w*0.8622},{h*0.5971} L{w*0.933},{h*0.75} L{w*0.7652},{h*0.7652} L{w*0.75},{h*0.933} L{w*0.5971},{h*0.8622} L{w*0.5},{h} L{w*0.4029},{h*0.8622} L{w*0.25},{h*0.933} L{w*0.2348},{h*0.7652} L{w*0.067},{h*0.75} L{w*0.1378},{h*0.5971} L0,{h*0.5} L{w*0.1378},{h*0.4029} L{w*0.067},{h*0.25} L{w*0.2348},{h*0.2348} L{w*0.25},{h*0.067} L{w*0.4029},{h*0.1378} Z"),
    ("star16", "M{w*0.5},0 L{w*0.5732},{h*0.1322} L{w*0.6913},{h*0.0381} L{w*0.7083},{h*0.1882} L{w*0.8536},{h*0.1464} L{w*0.8118},{h*0.2917} L{w*0.9619},{h*0.3087} L{w*0.8678},{h*0.4268} L{w},{h*0.5} L{w*0.8678},{h*0.5732} L{w*0.9619},{h*0.6913} L{w*0.8118},{h*0.7083} L{w*0.8536},{h*0.8536} L{w*0.7083},{h*0.8118} L{w*0.6913},{h*0.9619} L{w*0.5732},{h*0.8678} L{w*0.5},{h} L{w*0.4268},{h*0.8678} L{w*0.3087},{h*0.9619} L{w*0.2917},{h*0.8118} L{w*0.1464},{h*0.8536} L{w*0.1882},{h*0.7083} L{w*0.0381},{h*0.6913} L{w*0.1322},{h*0.5732} L0,{h*0.5} L{w*0.1322},{h*0.4268} L{w*0.0381},{h*0.3087} L{w*0.1882},{h*0.2917} L{w*0.1464},{h*0.1464} L{w*0.2917},{h*0.1882} L{w*0.3087},{h*0.0381} L{w*0.4268},{h*0.1322} Z"),
    ("star24", "M{w*0.5},0 L{w*0.5489},{h*0.1282} L{w*0.6294},{h*0.017} L{w*0.6435},{h*0.1535} L{w*0.75},{h*0.067} L{w*0.7283},{h*0.2025} L{w*0.8536},{h*0.1464} L{w*0.7975},{h*0.2717} L{w*0.933},{h*0.25} L{w*0.8465},{h*0.3565} L{w*0.983},{h*0.3706} L{w*0.8718},{h*0.4511} L{w},{h*0.5} L{w*0.8718},{h*0.5489} L{w*0.983},{h*0.6294} L{w*0.8465},{h*0.6435} L{w*0.933},{h*0.75} L{w*0.7975},{h*0.7283} L{w*0.8536},{h*0.8536} L{w*0.7283},{h*0.7975} L{w*0.75},{h*0.933} L{w*0.6435},{h*0.8465} L{w*0.6294},{h*0.983} L{w*0.5489},{h*0.8718} L{w*0.5},{h} L{w*0.4511},{h*0.8718} L{w*0.3706},{h*0.983} L{w*0.3565},{h*0.8465} L{w*0.25},{h*0.933} L{w*0.2717},{h*0.7975} L{w*0.1464},{h*0.8536} L{w*0.2025},{h*0.7283} L{w*0.067},{h*0.75} L{w*0.1535},{h*0.6435} L{w*0.017},{h*0.6294} L{w*0.1282},{h*0.5489} L0,{h*0.5} L{w*0.1282},{h*0.4511} L{w*0.017},{h*0.3706} L{w*0.1535},{h*0.3565} L{w*0.067},{h*0.25} L{w*0.2025},{h*0.2717} L{w*0.1464},{h*0.1464} L{w*0.2717},{h*0.2025} L{w*0.25},{h*0.067} L{w*0.3565},{h*0.1535} L{w*0.3706},{h*0.017} L{w*0.4511},{h*0.1282} Z"),
    ("star32", "M{w*0.5},0 L{w*0.5368},{h*0.1268} L{w*0.5975},{h*0.0096} L{w*0.6089},{h*0.1411} L{w*0.6913},{h*0.0381} L{w*0.6768},{h*0.1693} L{w*0.7778},{h*0.0843} L{w*0.7379},{h*0.2101} L{w*0.8536},{h*0.1464} L{w*0.7899},{h*0.2621} L{w*0.9157},{h*0.2222} L{w*0.8307},{h*0.3232} L{w*0.9619},{h*0.3087} L{w*0.8589},{h*0.3911} L{w*0.9904},{h*0.4025} L{w*0.8732},{h*0.4632} L{w},{h*0.5} L{w*0.8732},{h*0.5368} L{w*0.9904},{h*0.5975} L{w*0.8589},{h*0.6089} L{w*0.9619},{h*0.6913} L{w*0.8307},{h*0.6768} L{w*0.9157},{h*0.7778} L{w*0.7899},{h*0.7379} L{w*0.8536},{h*0.8536} L{w*0.7379},{h*0.7899} L{w*0.7778},{h*0.9157} L{w*0.6768},{h*0.8307} L{w*0.6913},{h*0.9619} L{w*0.6089},{h*0.8589} L{w*0.5975},{h*0.9904} L{w*0.5368},{h*0.8732} L{w*0.5},{h} L{w*0.4632},{h*0.8732} L{w*0.4025},{h*0.9904} L{w*0.3911},{h*0.8589} L{w*0.3087},{h*0.9619} L{w*0.3232},{h*0.8307} L{w*0.2222},{h*0.9157} L{w*0.2621},{h*0.7899} L{w*0.1464},{h*0.8536} L{w*0.2101},{h*0.7379} L{w*0.0843},{h*0.7778} L{w*0.1693},{h*0.6768} L{w*0.0381},{h*0.6913} L{w*0.1411},{h*0.6089} L{w*0.0096},{h*0.5975} L{w*0.1268},{h*0.5368} L0,{h*0.5} L{w*0.1268},{h*0.4632} L{w*0.0096},{h*0.4025} L{w*0.1411},{h*0.3911} L{w*0.0381},{h*0.3087} L{w*0.1693},{h*0.3232} L{w*0.0843},{h*0.2222} L{w*0.2101},{h*0.2621} L{w*0.1464},{h*0.1464} L{w*0.2621},{h*0.2101} L{w*0.2222},{h*0.0843} L{w*0.3232},{h*0.1693} L{w*0.3087},{h*0.0381} L{w*0.3911},{h*0.1411} L{w*0.4025},{h*0.0096} L{w*0.4632},{h*0.1268} Z"),
    ("mathPlus", "M{w*0.4},{h*0.1} L{w*0.6},{h*0.1} L{w*0.6},{h*0.4} L{w*0.9},{h*0.4} L{w*0.9},{h*0.6} L{w*0.6},{h*0.6} L{w*0.6},{h*0.9} L{w*0.4},{h*0.9} L{w*0.4},{h*0.6} L{w*0.1},{h*0.6} L{w*0.1},{h*0.4} L{w*0.4},{h*0.4} Z"),
    ("mathMinus", "M{w*0.1},{h*0.4} L{w*0.9},{h*0.4} L{w*0.9},{h*0.6} L{w*0.1},{h*0.6} Z"),
    ("mathMultiply", "M{w*0.15},{h*0.2914} L{w*0.2914},{h*0.15} L{w*0.5},{h*0.3586} L{w*0.7086},{h*0.15} L{w*0.85},{h*0.2914} L{w*0.6414},{h*0.5} L{w*0.85},{h*0.7086} L{w*0.7086},{h*0.85} L{w*0.5},{h*0.6414} L{w*0.2914},{h*0.85} L{w*0.15},{h*0.7086} L{w*0.3586},{h*0.5} Z"),
    ("mathDivide", "M{w*0.1},{h*0.44} L{w*0.9},{h*0.44} L{w*0.9},{h*0.56} L{w*0.1},{h*0.56} Z M{w*0.42},{h*0.25} A{w*0.08},{h*0.08} 0 1,0 {w*0.58},{h*0.25} A{w*0.08},{h*0.08} 0 1,0 {w*0.42},{h*0.25} Z M{w*0.42},{h*0.75} A{w*0.08},{h*0.08} 0 1,0 {w*0.58},{h*0.75} A{w*0.08},{h*0.08} 0 1,0 {w*0.42},{h*0.75} Z"),
    ("mathEqual", "M{w*0.1},{h*0.25} L{w*0.9},{h*0.25} L{w*0.9},{h*0.42} L{w*0.1},{h*0.42} Z M{w*0.1},{h*0.58} L{w*0.9},{h*0.58} L{w*0.9},{h*0.75} L{w*0.1},{h*0.75} Z"),
    ("mathNotEqual", "M{w*0.1},{h*0.25} L{w*0.9},{h*0.25} L{w*0.9},{h*0.42} L{w*0.1},{h*0.42} Z M{w*0.1},{h*0.58} L{w*0.9},{h*0.58} L{w*0.9},{h*0.75} L{w*0.1},{h*0.75} Z M{w*0.62},{h*0.05} L{w*0.74},{h*0.1} L{w*0.38},{h*0.95} L{w*0.26},{h*0.9} Z"),
    ("textPlain", "M0,0 L{w},0 L{w},{h} L0,{h} Z"),
    ("textStop", "M{w*0.3},0 L{w*0.7},0 L{w},{h*0.3} L{w},{h*0.7} L{w*0.7},{h} L{w*0.3},{h} L0,{h*0.7} L0,{h*0.3} Z"),
    ("textTriangle", "M{w2},0 L{w},{h} L0,{h} Z"),
    ("textTriangleInverted", "M0,0 L{w},0 L{w2},{h} Z"),
    ("textChevron", "M0,{h*0.3} L{w2},0 L{w},{h*0.3} L{w},{h} L{w2},{h*0.7} L0,{h} Z"),
    ("textChevronInverted", "M0,0 L{w2},{h*0.3} L{w},0 L{w},{h*0.7} L{w2},{h} L0,{h*0.7} Z"),
    ("textWave1", "M0,{hd} Q{w*0.25},{h*0.3} {w2},{hd} T{w},{hd} L{w},{hs} Q{w*0.75},{h*0.7} {w2},{hs} T0,{hs} Z"),
    ("textCircle", "M0,{cy} A{rx},{ry} 0 1,0 {w},{cy} A{rx},{ry} 0 1,0 0,{cy} Z"),
    ("textArchUp", "M0,{h} A{w2},{h} 0 0,1 {w},{h} Z"),
    ("textArchDown", "M0,0 A{w2},{h} 0 0,0 {w},0 Z"),
];
