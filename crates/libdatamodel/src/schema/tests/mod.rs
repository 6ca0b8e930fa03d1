mod type_graph_property_tests;
