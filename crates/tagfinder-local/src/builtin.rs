//! Knowledge base shipped with the binary: HTML element records, the Portuguese/English
//! alias table and the stopword list.
//!
//! Entries are written the way users type them (accents included); everything is normalized
//! when the catalog, alias table and stopword set are built.

use tagfinder_core::Record;

pub const STOPWORDS: &[&str] = &[
    "tag", "tags", "html", "do", "da", "de", "dos", "das", "para", "pra", "pro", "por", "em",
    "no", "na", "nos", "nas", "um", "uma", "uns", "umas", "como", "usar", "uso", "exemplo",
    "mostra", "mostrar", "preciso", "qual", "quais", "o", "a", "os", "as", "me", "ajuda",
    "ajudar", "sobre", "com", "sem", "quero", "queria", "pode", "poderia", "fazer", "colocar",
    "criar", "explicar", "explicacao", "explicação", "dizer", "mostre", "aqui", "isso", "essa",
    "esse", "essas", "esses", "deixa", "deixar", "porfavor", "por", "favor",
];

/// `(phrase, record key)` in declaration order. Later entries win when two phrases
/// normalize to the same text.
pub const ALIASES: &[(&str, &str)] = &[
    ("doctype", "doctype"),
    ("doctype html", "doctype"),
    ("declaracao", "doctype"),
    ("declaracao do html", "doctype"),
    ("declaracao html", "doctype"),
    ("declaracao do documento", "doctype"),
    ("tipo do documento", "doctype"),
    ("versao do html", "doctype"),
    ("html5", "doctype"),

    ("html", "html"),
    ("tag html", "html"),
    ("documento", "html"),
    ("documento html", "html"),
    ("raiz", "html"),
    ("tag raiz", "html"),
    ("elemento raiz", "html"),
    ("pagina", "html"),
    ("página", "html"),
    ("estrutura do documento", "html"),

    ("head", "head"),
    ("cabeca", "head"),
    ("cabeça", "head"),
    ("metadados", "head"),
    ("dados da pagina", "head"),
    ("dados da página", "head"),
    ("informacoes da aba", "head"),
    ("informações da aba", "head"),
    ("titulo da aba", "head"),
    ("título da aba", "head"),
    ("favicon", "head"),
    ("link do css", "head"),
    ("importar css", "head"),
    ("script no head", "head"),
    ("meta", "head"),
    ("charset", "head"),
    ("viewport", "head"),

    ("body", "body"),
    ("corpo", "body"),
    ("conteudo", "body"),
    ("conteúdo", "body"),
    ("conteudo visivel", "body"),
    ("conteúdo visível", "body"),
    ("parte visivel", "body"),
    ("o que aparece", "body"),

    ("header", "header"),
    ("cabecalho", "header"),
    ("cabeçalho", "header"),
    ("topo", "header"),
    ("parte de cima", "header"),
    ("area superior", "header"),
    ("área superior", "header"),

    ("nav", "nav"),
    ("menu", "nav"),
    ("menu de navegacao", "nav"),
    ("menu de navegação", "nav"),
    ("navegacao", "nav"),
    ("navegação", "nav"),
    ("barra de navegacao", "nav"),
    ("barra de navegação", "nav"),
    ("links do menu", "nav"),

    ("main", "main"),
    ("principal", "main"),
    ("conteudo principal", "main"),
    ("conteúdo principal", "main"),
    ("area principal", "main"),
    ("área principal", "main"),

    ("section", "section"),
    ("secao", "section"),
    ("seção", "section"),
    ("sessao", "section"),
    ("sessão", "section"),
    ("bloco", "section"),
    ("bloco de conteudo", "section"),
    ("bloco de conteúdo", "section"),
    ("separar conteudo", "section"),
    ("separar conteúdo", "section"),

    ("article", "article"),
    ("artigo", "article"),
    ("post", "article"),
    ("noticia", "article"),
    ("notícia", "article"),
    ("conteudo independente", "article"),
    ("conteúdo independente", "article"),
    ("card", "article"),

    ("aside", "aside"),
    ("lateral", "aside"),
    ("barra lateral", "aside"),
    ("sidebar", "aside"),
    ("conteudo lateral", "aside"),
    ("conteúdo lateral", "aside"),
    ("extras", "aside"),

    ("footer", "footer"),
    ("rodape", "footer"),
    ("rodapé", "footer"),
    ("fim da pagina", "footer"),
    ("fim da página", "footer"),

    ("p", "p"),
    ("paragrafo", "p"),
    ("parágrafo", "p"),
    ("paragrafos", "p"),
    ("parágrafos", "p"),
    ("texto", "p"),
    ("texto comum", "p"),
    ("texto normal", "p"),
    ("descricao", "p"),
    ("descrição", "p"),

    ("h1", "h"),
    ("h2", "h"),
    ("h3", "h"),
    ("h4", "h"),
    ("h5", "h"),
    ("h6", "h"),
    ("h", "h"),
    ("titulo", "h"),
    ("título", "h"),
    ("titulos", "h"),
    ("títulos", "h"),
    ("cabecalho de texto", "h"),
    ("cabeçalho de texto", "h"),
    ("heading", "h"),
    ("headline", "h"),
    ("titulo principal", "h"),
    ("título principal", "h"),
    ("subtitulo", "h"),
    ("subtítulo", "h"),

    ("span", "span"),
    ("trecho", "span"),
    ("destacar trecho", "span"),
    ("inline", "span"),
    ("texto pequeno", "span"),
    ("marcar parte do texto", "span"),

    ("strong", "strong"),
    ("negrito", "strong"),
    ("bold", "strong"),
    ("importante", "strong"),
    ("forte", "strong"),
    ("destaque forte", "strong"),

    ("em", "em"),
    ("italico", "em"),
    ("itálico", "em"),
    ("enfase", "em"),
    ("ênfase", "em"),
    ("destaque leve", "em"),

    ("br", "br"),
    ("quebra de linha", "br"),
    ("pular linha", "br"),
    ("linha nova", "br"),
    ("enter", "br"),
    ("pular", "br"),
    ("quebra", "br"),
    ("quebrar", "br"),

    ("hr", "hr"),
    ("linha", "hr"),
    ("linha horizontal", "hr"),
    ("separador", "hr"),
    ("divisor", "hr"),
    ("separar", "hr"),
    ("divisao", "hr"),
    ("divisão", "hr"),

    ("code", "code"),
    ("codigo", "code"),
    ("código", "code"),
    ("mostrar codigo", "code"),
    ("mostrar código", "code"),
    ("snippet", "code"),
    ("trecho de codigo", "code"),
    ("trecho de código", "code"),

    ("pre", "pre"),
    ("preformatado", "pre"),
    ("pre formatado", "pre"),
    ("pré-formatado", "pre"),
    ("texto preformatado", "pre"),
    ("mantem espacos", "pre"),
    ("mantém espaços", "pre"),

    ("a", "a"),
    ("link", "a"),
    ("links", "a"),
    ("ancora", "a"),
    ("âncora", "a"),
    ("hiperlink", "a"),
    ("hyperlink", "a"),
    ("url", "a"),
    ("href", "a"),
    ("redirecionar", "a"),
    ("ir para", "a"),

    ("img", "img"),
    ("imagem", "img"),
    ("imagens", "img"),
    ("foto", "img"),
    ("fotos", "img"),
    ("figura", "img"),
    ("figuras", "img"),
    ("image", "img"),
    ("picture", "img"),
    ("colocar imagem", "img"),
    ("mostrar imagem", "img"),

    ("video", "video"),
    ("vídeo", "video"),
    ("videos", "video"),
    ("vídeos", "video"),
    ("mp4", "video"),
    ("player de video", "video"),
    ("player de vídeo", "video"),
    ("filme", "video"),

    ("audio", "audio"),
    ("áudio", "audio"),
    ("som", "audio"),
    ("musica", "audio"),
    ("música", "audio"),
    ("mp3", "audio"),
    ("player de audio", "audio"),
    ("player de áudio", "audio"),

    ("iframe", "iframe"),
    ("incorporar", "iframe"),
    ("embed", "iframe"),
    ("frame", "iframe"),
    ("site dentro", "iframe"),
    ("pagina dentro", "iframe"),
    ("página dentro", "iframe"),
    ("colocar um site dentro", "iframe"),

    ("ul", "ul"),
    ("lista", "ul"),
    ("listas", "ul"),
    ("lista com pontos", "ul"),
    ("lista de pontos", "ul"),
    ("marcadores", "ul"),
    ("pontos", "ul"),
    ("bolinhas", "ul"),
    ("bullet", "ul"),
    ("bullets", "ul"),
    ("unordered", "ul"),
    ("unordered list", "ul"),
    ("lista nao ordenada", "ul"),
    ("lista não ordenada", "ul"),

    ("ol", "ol"),
    ("lista numerada", "ol"),
    ("lista ordenada", "ol"),
    ("numerada", "ol"),
    ("numeros", "ol"),
    ("números", "ol"),
    ("ordered", "ol"),
    ("ordered list", "ol"),
    ("sequencia", "ol"),
    ("sequência", "ol"),
    ("passos", "ol"),
    ("step by step", "ol"),

    ("li", "li"),
    ("item", "li"),
    ("itens", "li"),
    ("items", "li"),
    ("item da lista", "li"),
    ("linha da lista", "li"),
    ("ponto da lista", "li"),

    ("dl", "dl"),
    ("lista de definicao", "dl"),
    ("lista de definição", "dl"),
    ("definicoes", "dl"),
    ("definições", "dl"),
    ("glossario", "dl"),
    ("glossário", "dl"),
    ("termo e definicao", "dl"),
    ("termo e definição", "dl"),

    ("table", "table"),
    ("tabela", "table"),
    ("tabelas", "table"),
    ("planilha", "table"),
    ("grid", "table"),
    ("quadro", "table"),

    ("tr", "tr"),
    ("linha da tabela", "tr"),
    ("row", "tr"),
    ("linha", "tr"),

    ("th", "th"),
    ("cabecalho da tabela", "th"),
    ("cabeçalho da tabela", "th"),
    ("titulo da coluna", "th"),
    ("título da coluna", "th"),
    ("header da tabela", "th"),

    ("td", "td"),
    ("coluna", "td"),
    ("celula", "td"),
    ("célula", "td"),
    ("valor", "td"),
    ("dado", "td"),

    ("form", "form"),
    ("formulario", "form"),
    ("formulário", "form"),
    ("contato", "form"),
    ("enviar dados", "form"),
    ("enviar formulario", "form"),
    ("enviar formulário", "form"),

    ("label", "label"),
    ("rotulo", "label"),
    ("rótulo", "label"),
    ("etiqueta", "label"),
    ("nome do campo", "label"),
    ("titulo do campo", "label"),
    ("título do campo", "label"),

    ("input", "input"),
    ("campo", "input"),
    ("entrada", "input"),
    ("caixa de texto", "input"),
    ("digitar", "input"),
    ("email", "input"),
    ("senha", "input"),
    ("text", "input"),

    ("textarea", "textarea"),
    ("mensagem", "textarea"),
    ("texto grande", "textarea"),
    ("multilinha", "textarea"),
    ("comentario", "textarea"),
    ("comentário", "textarea"),
    ("area de texto", "textarea"),
    ("área de texto", "textarea"),

    ("button", "button"),
    ("botao", "button"),
    ("botão", "button"),
    ("clicar", "button"),
    ("acao", "button"),
    ("ação", "button"),
    ("enviar", "button"),
    ("confirmar", "button"),

    ("select", "select"),
    ("selecao", "select"),
    ("seleção", "select"),
    ("dropdown", "select"),
    ("opcao", "select"),
    ("opção", "select"),
    ("lista suspensa", "select"),
    ("combobox", "select"),
];

struct Entry {
    key: &'static str,
    title: &'static str,
    description: &'static str,
    example: &'static str,
    keywords: &'static [&'static str],
}

const ENTRIES: &[Entry] = &[
    Entry {
        key: "doctype",
        title: "<!DOCTYPE html>",
        description: "Declara o tipo de documento (HTML5). Deve ser a primeira linha do arquivo HTML.",
        example: "<!DOCTYPE html>\n<html lang=\"pt-br\">\n  ...\n</html>",
        keywords: &["doctype", "html5", "tipo do documento", "declaração", "declaracao"],
    },
    Entry {
        key: "html",
        title: "<html>",
        description: "Elemento raiz que envolve todo o documento HTML.",
        example: "<html lang=\"pt-br\">\n  ...\n</html>",
        keywords: &["html", "documento", "pagina", "página", "site"],
    },
    Entry {
        key: "head",
        title: "<head>",
        description: "Contém metadados (não aparecem na página) como título, links de CSS e scripts.",
        example: "<head>\n  <meta charset=\"UTF-8\">\n  <title>Minha página</title>\n</head>",
        keywords: &[
            "head",
            "metadados",
            "meta",
            "title",
            "titulo",
            "título",
            "aba",
            "cabeça",
            "cabeca",
        ],
    },
    Entry {
        key: "body",
        title: "<body>",
        description: "Contém todo o conteúdo visível da página.",
        example: "<body>\n  <h1>Olá</h1>\n</body>",
        keywords: &["body", "corpo", "conteudo", "conteúdo", "visivel", "visível"],
    },
    Entry {
        key: "header",
        title: "<header>",
        description: "Cabeçalho da página ou de uma seção.",
        example: "<header>\n  <h1>Meu site</h1>\n</header>",
        keywords: &["header", "cabeçalho", "cabecalho", "topo"],
    },
    Entry {
        key: "nav",
        title: "<nav>",
        description: "Área de navegação (menu de links).",
        example: "<nav>\n  <a href=\"#home\">Home</a>\n</nav>",
        keywords: &["nav", "menu", "navegação", "navegacao", "links"],
    },
    Entry {
        key: "main",
        title: "<main>",
        description: "Conteúdo principal da página (idealmente único por página).",
        example: "<main>\n  <section>...</section>\n</main>",
        keywords: &["main", "principal", "conteudo principal", "conteúdo principal"],
    },
    Entry {
        key: "section",
        title: "<section>",
        description: "Define uma seção do conteúdo (um bloco temático).",
        example: "<section>\n  <h2>Sobre</h2>\n  <p>Conteúdo...</p>\n</section>",
        keywords: &["section", "seção", "secao", "bloco", "sessao", "sessão"],
    },
    Entry {
        key: "article",
        title: "<article>",
        description: "Conteúdo independente (post, notícia, card completo).",
        example: "<article>\n  <h2>Post</h2>\n  <p>Texto...</p>\n</article>",
        keywords: &["article", "artigo", "post", "noticia", "notícia"],
    },
    Entry {
        key: "aside",
        title: "<aside>",
        description: "Conteúdo lateral/relacionado (sidebar, extras).",
        example: "<aside>\n  <p>Conteúdo lateral</p>\n</aside>",
        keywords: &["aside", "lateral", "sidebar", "barra lateral"],
    },
    Entry {
        key: "footer",
        title: "<footer>",
        description: "Rodapé da página ou de uma seção.",
        example: "<footer>\n  <p>Rodapé</p>\n</footer>",
        keywords: &["footer", "rodape", "rodapé", "fim"],
    },
    Entry {
        key: "p",
        title: "<p>",
        description: "Esta tag é usada para colocar um parágrafo na tela do seu site.",
        example: "<p>Seu parágrafo escrito aqui dentro</p>",
        keywords: &["p", "paragrafo", "parágrafo", "texto", "frase"],
    },
    Entry {
        key: "h",
        title: "<h1> até <h6>",
        description: "Tags de título. <h1> é o mais importante, <h6> o menos importante.",
        example: "<h1>Título principal</h1>\n<h2>Título de seção</h2>",
        keywords: &[
            "h1",
            "h2",
            "h3",
            "h4",
            "h5",
            "h6",
            "titulo",
            "título",
            "heading",
            "titulos",
            "títulos",
        ],
    },
    Entry {
        key: "span",
        title: "<span>",
        description: "Container inline para destacar um trecho e aplicar estilo.",
        example: "<p>Olá <span class=\"destaque\">mundo</span></p>",
        keywords: &["span", "trecho", "destaque", "inline"],
    },
    Entry {
        key: "strong",
        title: "<strong>",
        description: "Dá forte importância ao texto (normalmente aparece em negrito).",
        example: "<strong>Importante</strong>",
        keywords: &["strong", "negrito", "importante", "bold"],
    },
    Entry {
        key: "em",
        title: "<em>",
        description: "Ênfase no texto (normalmente itálico).",
        example: "<em>Ênfase</em>",
        keywords: &["em", "italico", "itálico", "enfase", "ênfase"],
    },
    Entry {
        key: "br",
        title: "<br>",
        description: "Quebra de linha simples. Não tem fechamento.",
        example: "Linha 1<br>\nLinha 2",
        keywords: &["br", "quebra de linha", "pular linha", "linha nova"],
    },
    Entry {
        key: "hr",
        title: "<hr>",
        description: "Linha horizontal para separar conteúdo. Não tem fechamento.",
        example: "<hr>",
        keywords: &["hr", "linha", "separador", "divisor", "divisao", "divisão"],
    },
    Entry {
        key: "code",
        title: "<code>",
        description: "Usada para mostrar código dentro do texto.",
        example: "<p>Use a tag <code>&lt;img&gt;</code>.</p>",
        keywords: &["code", "codigo", "código", "snippet", "trecho de código"],
    },
    Entry {
        key: "pre",
        title: "<pre>",
        description: "Texto pré-formatado (mantém espaços e quebras de linha).",
        example: "<pre>\nTexto  com   espaços\n</pre>",
        keywords: &["pre", "preformatado", "pré-formatado", "espacos", "espaços"],
    },
    Entry {
        key: "a",
        title: "<a>",
        description: "Cria um link para outra página, site ou seção.",
        example: "<a href=\"https://exemplo.com\">Clique aqui</a>",
        keywords: &["a", "link", "ancora", "âncora", "href", "url", "site", "hyperlink"],
    },
    Entry {
        key: "img",
        title: "<img>",
        description: "Insere uma imagem na página. Não tem fechamento.",
        example: "<img src=\"foto.jpg\" alt=\"Descrição da imagem\">",
        keywords: &[
            "img",
            "image",
            "imagem",
            "foto",
            "figura",
            "picture",
            "imagens",
            "fotos",
        ],
    },
    Entry {
        key: "video",
        title: "<video>",
        description: "Insere um vídeo (use controls para controles).",
        example: "<video controls src=\"video.mp4\"></video>",
        keywords: &["video", "vídeo", "mp4", "movie", "player"],
    },
    Entry {
        key: "audio",
        title: "<audio>",
        description: "Insere um áudio (use controls para controles).",
        example: "<audio controls src=\"som.mp3\"></audio>",
        keywords: &["audio", "áudio", "som", "mp3", "musica", "música"],
    },
    Entry {
        key: "iframe",
        title: "<iframe>",
        description: "Incorpora outra página dentro da sua.",
        example: "<iframe src=\"https://exemplo.com\" width=\"600\" height=\"400\"></iframe>",
        keywords: &["iframe", "incorporar", "embed", "frame", "site dentro"],
    },
    Entry {
        key: "ul",
        title: "<ul>",
        description: "Lista não ordenada (com marcadores).",
        example: "<ul>\n  <li>Item 1</li>\n  <li>Item 2</li>\n</ul>",
        keywords: &[
            "ul",
            "lista",
            "listas",
            "marcadores",
            "pontos",
            "bolinhas",
            "bullet",
            "bullets",
            "unordered",
            "nao ordenada",
            "não ordenada",
        ],
    },
    Entry {
        key: "ol",
        title: "<ol>",
        description: "Lista ordenada (numerada).",
        example: "<ol>\n  <li>Passo 1</li>\n  <li>Passo 2</li>\n</ol>",
        keywords: &[
            "ol",
            "lista numerada",
            "lista ordenada",
            "numerada",
            "numeros",
            "números",
            "ordered",
            "sequencia",
            "sequência",
            "passos",
        ],
    },
    Entry {
        key: "li",
        title: "<li>",
        description: "Item de uma lista (dentro de ul/ol).",
        example: "<li>Item</li>",
        keywords: &["li", "item", "itens", "items", "item da lista"],
    },
    Entry {
        key: "dl",
        title: "<dl>",
        description: "Lista de definições (termo + descrição).",
        example: "<dl>\n  <dt>Termo</dt>\n  <dd>Definição</dd>\n</dl>",
        keywords: &[
            "dl",
            "glossario",
            "glossário",
            "definicao",
            "definição",
            "lista de definição",
        ],
    },
    Entry {
        key: "table",
        title: "<table>",
        description: "Cria uma tabela.",
        example: "<table>\n  <tr><th>Nome</th></tr>\n  <tr><td>Erick</td></tr>\n</table>",
        keywords: &["table", "tabela", "tabelas", "planilha", "grid"],
    },
    Entry {
        key: "tr",
        title: "<tr>",
        description: "Linha da tabela.",
        example: "<tr>\n  <td>...</td>\n</tr>",
        keywords: &["tr", "linha da tabela", "row"],
    },
    Entry {
        key: "th",
        title: "<th>",
        description: "Célula de cabeçalho da tabela.",
        example: "<th>Título</th>",
        keywords: &[
            "th",
            "cabecalho da tabela",
            "cabeçalho da tabela",
            "titulo da coluna",
            "título da coluna",
        ],
    },
    Entry {
        key: "td",
        title: "<td>",
        description: "Célula comum da tabela.",
        example: "<td>Valor</td>",
        keywords: &["td", "celula", "célula", "coluna", "dado", "valor"],
    },
    Entry {
        key: "form",
        title: "<form>",
        description: "Cria um formulário para envio de dados.",
        example: "<form action=\"/enviar\" method=\"POST\">\n  <input type=\"text\" name=\"nome\">\n  <button type=\"submit\">Enviar</button>\n</form>",
        keywords: &["form", "formulario", "formulário", "enviar dados", "contato"],
    },
    Entry {
        key: "label",
        title: "<label>",
        description: "Rótulo ligado a um campo do formulário.",
        example: "<label for=\"nome\">Nome</label>\n<input id=\"nome\" type=\"text\">",
        keywords: &["label", "rotulo", "rótulo", "etiqueta"],
    },
    Entry {
        key: "input",
        title: "<input>",
        description: "Campo de entrada. Não tem fechamento.",
        example: "<input type=\"text\" placeholder=\"Digite aqui\">",
        keywords: &[
            "input",
            "campo",
            "entrada",
            "digitar",
            "senha",
            "email",
            "caixa de texto",
        ],
    },
    Entry {
        key: "textarea",
        title: "<textarea>",
        description: "Campo de texto grande (multilinha).",
        example: "<textarea placeholder=\"Escreva...\"></textarea>",
        keywords: &[
            "textarea",
            "texto grande",
            "multilinha",
            "mensagem",
            "comentario",
            "comentário",
        ],
    },
    Entry {
        key: "button",
        title: "<button>",
        description: "Botão clicável.",
        example: "<button type=\"button\">Clique</button>",
        keywords: &["button", "botao", "botão", "clicar", "acao", "ação"],
    },
    Entry {
        key: "select",
        title: "<select>",
        description: "Caixa de seleção (dropdown).",
        example: "<select>\n  <option>Opção 1</option>\n  <option>Opção 2</option>\n</select>",
        keywords: &[
            "select",
            "selecao",
            "seleção",
            "dropdown",
            "opcao",
            "opção",
            "lista suspensa",
        ],
    },
];

/// Raw records in menu order, before validation.
pub fn records() -> Vec<Record> {
    ENTRIES
        .iter()
        .map(|e| Record {
            key: e.key.to_string(),
            title: e.title.to_string(),
            description: e.description.to_string(),
            example: e.example.to_string(),
            keywords: e.keywords.iter().map(|k| k.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let mut seen = HashSet::new();
        for e in ENTRIES {
            assert!(seen.insert(e.key), "duplicate builtin key {:?}", e.key);
        }
        assert_eq!(records().len(), ENTRIES.len());
    }

    #[test]
    fn every_alias_targets_a_builtin_key() {
        let keys: HashSet<&str> = ENTRIES.iter().map(|e| e.key).collect();
        for (phrase, key) in ALIASES {
            assert!(keys.contains(key), "alias {phrase:?} targets unknown key {key:?}");
        }
    }
}
