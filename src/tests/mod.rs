#[cfg(test)]
mod rendering_tests {
    use rustpython_parser::{ast, parse, Mode};

    use crate::renderer::{ModuleRenderer, Render, RenderContext, TypeContext};

    fn parse_module(source: &str) -> ast::ModModule {
        match parse(source, Mode::Module, "<test>").expect("test source must parse") {
            ast::Mod::Module(module) => module,
            _ => unreachable!("Mode::Module always yields a module"),
        }
    }

    /// Render the first top-level statement of `source`.
    fn render_stmt(source: &str, context: &RenderContext) -> String {
        let module = parse_module(source);
        module.body[0].render(context)
    }

    fn type_context(name: &str) -> RenderContext {
        RenderContext::Type(TypeContext::new(name))
    }

    #[test]
    fn module_assignment_gets_var_prefix() {
        assert_eq!(render_stmt("x = 1", &RenderContext::Module), "var x = 1");
        assert_eq!(render_stmt("x = 1", &RenderContext::Closure), "x = 1");
    }

    #[test]
    fn multi_target_assignment_joins_targets() {
        assert_eq!(
            render_stmt("a = b = 1", &RenderContext::Module),
            "var a, b = 1"
        );
    }

    #[test]
    fn identifiers_are_lower_camel_cased() {
        assert_eq!(
            render_stmt("my_value = other_value", &RenderContext::Closure),
            "myValue = otherValue"
        );
    }

    #[test]
    fn augmented_assignment_uses_operator_table() {
        assert_eq!(render_stmt("x += 2", &RenderContext::Closure), "x += 2");
        assert_eq!(render_stmt("x //= 2", &RenderContext::Closure), "x //= 2");
        assert_eq!(render_stmt("x <<= 1", &RenderContext::Closure), "x <<= 1");
    }

    #[test]
    fn self_renders_as_receiver_alias_in_type_context() {
        assert_eq!(
            render_stmt("return self.name", &type_context("Widget")),
            "return w.name"
        );
        // outside a type context `self` is an ordinary identifier
        assert_eq!(render_stmt("return self", &RenderContext::Closure), "return self");
    }

    #[test]
    fn constants_render_literally() {
        assert_eq!(render_stmt("s = 'hi'", &RenderContext::Closure), "s = \"hi\"");
        assert_eq!(render_stmt("t = True", &RenderContext::Closure), "t = true");
        assert_eq!(render_stmt("f = False", &RenderContext::Closure), "f = false");
        assert_eq!(render_stmt("n = None", &RenderContext::Closure), "n = None");
        assert_eq!(render_stmt("x = 2.5", &RenderContext::Closure), "x = 2.5");
    }

    #[test]
    fn binary_and_unary_operators() {
        assert_eq!(render_stmt("a ** b", &RenderContext::Closure), "a ** b");
        assert_eq!(render_stmt("a // b", &RenderContext::Closure), "a // b");
        assert_eq!(render_stmt("a | b & c", &RenderContext::Closure), "a | b & c");
        assert_eq!(render_stmt("not x", &RenderContext::Closure), "!x");
        assert_eq!(render_stmt("-x", &RenderContext::Closure), "-x");
        assert_eq!(render_stmt("~x", &RenderContext::Closure), "~x");
    }

    #[test]
    fn boolean_operations_join_operands() {
        assert_eq!(
            render_stmt("a and b or c", &RenderContext::Closure),
            "a && b || c"
        );
    }

    #[test]
    fn comparison_chains_are_space_joined() {
        assert_eq!(render_stmt("a < b <= c", &RenderContext::Closure), "a < b <= c");
        assert_eq!(
            render_stmt("x is not None", &RenderContext::Closure),
            "x is not None"
        );
        assert_eq!(render_stmt("k in d", &RenderContext::Closure), "k in d");
    }

    #[test]
    fn call_orders_positionals_keywords_then_spread() {
        assert_eq!(
            render_stmt("f(a, b, *rest, key=1)", &RenderContext::Closure),
            "f(a, b, key=1, *rest)"
        );
    }

    #[test]
    fn call_keyword_without_name_keeps_only_value() {
        assert_eq!(render_stmt("f(**opts)", &RenderContext::Closure), "f(opts)");
    }

    #[test]
    fn plain_for_loop_discards_index() {
        assert_eq!(
            render_stmt("for item in items:\n    use(item)\n", &RenderContext::Closure),
            "for _, item := range items {\n    use(item)\n}"
        );
    }

    #[test]
    fn enumerate_for_loop_strips_wrapper_and_parens() {
        assert_eq!(
            render_stmt(
                "for i, v in enumerate(items):\n    f(i, v)\n",
                &RenderContext::Closure
            ),
            "for i, v := range items {\n    f(i, v)\n}"
        );
    }

    #[test]
    fn if_statement_wraps_body_and_ignores_else() {
        let rendered = render_stmt(
            "if x < y:\n    f()\nelse:\n    g()\n",
            &RenderContext::Closure,
        );
        assert_eq!(rendered, "if x < y {\n    f()\n}");
        assert!(!rendered.contains("g()"));
    }

    #[test]
    fn collection_literals() {
        assert_eq!(render_stmt("[1, 2]", &RenderContext::Closure), "[1, 2]");
        assert_eq!(render_stmt("(1, 2)", &RenderContext::Closure), "(1, 2)");
        assert_eq!(
            render_stmt("{'a': 1, 'b': 2}", &RenderContext::Closure),
            "map[interface{}]interface{}{\"a\": 1, \"b\": 2}"
        );
    }

    #[test]
    fn subscripts_and_slices() {
        assert_eq!(render_stmt("xs[0]", &RenderContext::Closure), "xs[0]");
        assert_eq!(render_stmt("xs[1:2]", &RenderContext::Closure), "xs[1:2]");
        assert_eq!(render_stmt("xs[1:2:3]", &RenderContext::Closure), "xs[1:2:3]");
        assert_eq!(render_stmt("xs[::2]", &RenderContext::Closure), "xs[::2]");
        assert_eq!(render_stmt("xs[a:]", &RenderContext::Closure), "xs[a:]");
    }

    #[test]
    fn comprehensions_render_clause_fragments() {
        assert_eq!(
            render_stmt("[f(x) for x in xs if x]", &RenderContext::Closure),
            "[f(x) for x in xs if x]"
        );
        // tuple targets lose their parens, generator expressions their brackets
        assert_eq!(
            render_stmt("total(v for k, v in items)", &RenderContext::Closure),
            "total(v for k, v in items)"
        );
    }

    #[test]
    fn lambda_renders_as_inline_func() {
        assert_eq!(
            render_stmt("g = lambda x: x + 1", &RenderContext::Closure),
            "g = func(x python.Type) { return x + 1 }"
        );
    }

    #[test]
    fn module_function_renders_as_declaration() {
        assert_eq!(
            render_stmt("def greet(name):\n    return name\n", &RenderContext::Module),
            "\nfunc Greet(name python.Type) {\n    return name\n}"
        );
    }

    #[test]
    fn docstring_becomes_leading_comment() {
        assert_eq!(
            render_stmt(
                "def greet(name):\n    \"Say hello\"\n    return name\n",
                &RenderContext::Module
            ),
            "\n// Say hello\nfunc Greet(name python.Type) {\n    return name\n}"
        );
    }

    #[test]
    fn str_annotation_maps_to_go_string() {
        let rendered = render_stmt(
            "def shout(text: str):\n    return text\n",
            &RenderContext::Module,
        );
        assert!(rendered.contains("func Shout(text string) {"));
    }

    #[test]
    fn nested_def_renders_as_local_closure() {
        let rendered = render_stmt(
            "def outer():\n    def inner():\n        return 1\n    return inner\n",
            &RenderContext::Module,
        );
        assert!(rendered.starts_with("\nfunc Outer() {"));
        assert!(rendered.contains("inner := func() {"));
        assert!(!rendered.contains("func Inner"));
    }

    #[test]
    fn class_renders_struct_and_method_with_receiver() {
        let rendered = render_stmt(
            "class Widget:\n    \"A widget.\"\n    def rename(self, name):\n        self.name = name\n",
            &RenderContext::Module,
        );
        assert_eq!(
            rendered,
            "\n// A widget.\ntype Widget struct {}\n\nfunc (w *Widget) rename(self python.Type, name python.Type) {\n    w.name = name\n}"
        );
    }

    #[test]
    fn return_statement_forms() {
        assert_eq!(render_stmt("return", &RenderContext::Closure), "return");
        // tuple returns lose their parens
        assert_eq!(render_stmt("return a, b", &RenderContext::Closure), "return a, b");
    }

    #[test]
    fn yield_and_assert_degrade_to_comments() {
        let gen = render_stmt("def gen():\n    yield 1\n", &RenderContext::Module);
        assert!(gen.contains("// yield 1"));
        assert_eq!(
            render_stmt("assert x == 1", &RenderContext::Closure),
            "// assert x == 1"
        );
    }

    #[test]
    fn break_and_continue_are_verbatim() {
        let rendered = render_stmt(
            "for x in xs:\n    break\n",
            &RenderContext::Closure,
        );
        assert!(rendered.contains("break"));
        let rendered = render_stmt(
            "for x in xs:\n    continue\n",
            &RenderContext::Closure,
        );
        assert!(rendered.contains("continue"));
    }

    #[test]
    fn unmapped_statements_fall_back_to_comments() {
        assert_eq!(
            render_stmt("while x:\n    pass\n", &RenderContext::Module),
            "// unknown While (test, body, orelse)"
        );
        assert_eq!(
            render_stmt("import os", &RenderContext::Module),
            "// unknown Import (names)"
        );
        assert_eq!(render_stmt("pass", &RenderContext::Module), "// unknown Pass ()");
        assert_eq!(
            render_stmt(
                "try:\n    f()\nexcept Exception:\n    pass\n",
                &RenderContext::Module
            ),
            "// unknown Try (body, handlers, orelse, finalbody)"
        );
    }

    #[test]
    fn unmapped_expressions_fall_back_to_comments() {
        let rendered = render_stmt("x = {1, 2}", &RenderContext::Closure);
        assert!(rendered.contains("// unknown Set (elts)"));
        let rendered = render_stmt("y = f'{x}'", &RenderContext::Closure);
        assert!(rendered.contains("// unknown JoinedStr (values)"));
    }

    #[test]
    fn rendering_is_deterministic() {
        let module = parse_module(
            "x = 1\n\ndef greet(name):\n    return name\n\nclass Widget:\n    def rename(self):\n        self.name = None\n",
        );
        let renderer = ModuleRenderer;
        let first = renderer.render("widget.py", &module);
        let second = renderer.render("widget.py", &module);
        assert_eq!(first, second);
    }

    #[test]
    fn module_renderer_emits_header_and_statements() {
        let module = parse_module("x = 1\n");
        let rendered = ModuleRenderer.render("pkg/config.py", &module);
        assert_eq!(rendered, "package config\n\nvar x = 1\n");
    }
}
