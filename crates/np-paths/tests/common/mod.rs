#![allow(dead_code)]

use np_paths::NetlistPaths;

/// Lowers an in-memory XML dump and canonicalises the result.
pub fn facade(xml: &str) -> NetlistPaths {
    NetlistPaths::from_xml_str(xml).expect("fixture ingests")
}

/// A purely combinational adder: `o_sum` and `o_co` are continuously
/// assigned from `i_a` and `i_b`.
pub fn adder_xml() -> String {
    r#"<verilator_xml>
  <files>
    <file id="a" filename="rtl/adder.sv" language="1800-2012"/>
  </files>
  <netlist>
    <module name="TOP" loc="a,1,1,10,10">
      <topscope loc="a,1,1,10,10">
        <scope name="adder" loc="a,1,1,10,10">
          <var name="adder.i_a" dir="input" dtype_id="1" loc="a,2,3,2,20"/>
          <var name="adder.i_b" dir="input" dtype_id="1" loc="a,3,3,3,20"/>
          <var name="adder.o_sum" dir="output" dtype_id="1" loc="a,4,3,4,21"/>
          <var name="adder.o_co" dir="output" dtype_id="2" loc="a,5,3,5,20"/>
          <contassign loc="a,7,3,7,32">
            <add loc="a,7,18,7,32">
              <varref name="adder.i_a" dtype_id="1" loc="a,7,18,7,21"/>
              <varref name="adder.i_b" dtype_id="1" loc="a,7,24,7,27"/>
            </add>
            <varref name="adder.o_sum" dtype_id="1" loc="a,7,10,7,15"/>
          </contassign>
          <contassign loc="a,8,3,8,34">
            <shiftr loc="a,8,18,8,34">
              <add loc="a,8,18,8,30">
                <varref name="adder.i_a" dtype_id="1" loc="a,8,18,8,21"/>
                <varref name="adder.i_b" dtype_id="1" loc="a,8,24,8,27"/>
              </add>
              <const name="8" loc="a,8,33,8,34"/>
            </shiftr>
            <varref name="adder.o_co" dtype_id="2" loc="a,8,10,8,14"/>
          </contassign>
        </scope>
      </topscope>
    </module>
    <typetable>
      <basicdtype id="1" name="logic" loc="a,2,3,2,20" left="7" right="0"/>
      <basicdtype id="2" name="logic" loc="a,5,3,5,20"/>
    </typetable>
  </netlist>
</verilator_xml>
"#
    .to_string()
}

/// A clocked counter with an internal register `counter_q`, a count
/// output and a wrap detector.
pub fn counter_xml() -> String {
    r#"<verilator_xml>
  <files>
    <file id="a" filename="rtl/counter.sv" language="1800-2012"/>
  </files>
  <netlist>
    <module name="TOP" loc="a,1,1,20,10">
      <topscope loc="a,1,1,20,10">
        <scope name="counter" loc="a,1,1,20,10">
          <var name="counter.i_clk" dir="input" dtype_id="2" loc="a,2,3,2,18"/>
          <var name="counter.i_rst" dir="input" dtype_id="2" loc="a,3,3,3,18"/>
          <var name="counter.o_count" dir="output" dtype_id="1" loc="a,4,3,4,21"/>
          <var name="counter.o_wrap" dir="output" dtype_id="2" loc="a,5,3,5,20"/>
          <var name="counter.counter_q" dtype_id="1" loc="a,7,3,7,22"/>
          <always loc="a,9,3,14,6">
            <sentree loc="a,9,10,9,31">
              <senitem edgeType="POS" loc="a,9,12,9,31">
                <varref name="counter.i_clk" dtype_id="2" loc="a,9,22,9,27"/>
              </senitem>
            </sentree>
            <begin>
              <if loc="a,10,5,13,8">
                <varref name="counter.i_rst" dtype_id="2" loc="a,10,9,10,14"/>
                <assigndly loc="a,11,7,11,26">
                  <const name="0" loc="a,11,21,11,26"/>
                  <varref name="counter.counter_q" dtype_id="1" loc="a,11,7,11,16"/>
                </assigndly>
                <assigndly loc="a,13,7,13,34">
                  <add loc="a,13,20,13,34">
                    <varref name="counter.counter_q" dtype_id="1" loc="a,13,20,13,29"/>
                    <const name="1" loc="a,13,33,13,34"/>
                  </add>
                  <varref name="counter.counter_q" dtype_id="1" loc="a,13,7,13,16"/>
                </assigndly>
              </if>
            </begin>
          </always>
          <contassign loc="a,16,3,16,32">
            <varref name="counter.counter_q" dtype_id="1" loc="a,16,22,16,31"/>
            <varref name="counter.o_count" dtype_id="1" loc="a,16,10,16,17"/>
          </contassign>
          <contassign loc="a,17,3,17,42">
            <eq loc="a,17,20,17,42">
              <varref name="counter.counter_q" dtype_id="1" loc="a,17,25,17,34"/>
              <const name="255" loc="a,17,38,17,41"/>
            </eq>
            <varref name="counter.o_wrap" dtype_id="2" loc="a,17,10,17,16"/>
          </contassign>
        </scope>
      </topscope>
    </module>
    <typetable>
      <basicdtype id="1" name="logic" loc="a,7,3,7,22" left="7" right="0"/>
      <basicdtype id="2" name="logic" loc="a,2,3,2,18"/>
    </typetable>
  </netlist>
</verilator_xml>
"#
    .to_string()
}

/// Eight generate-block pipestages, each holding a `data_q` register fed
/// by the previous stage.
pub fn pipeline_xml(stages: usize) -> String {
    let mut body = String::new();
    body.push_str(
        r#"          <var name="pipeline.i_clk" dir="input" dtype_id="2" loc="a,2,3,2,18"/>
          <var name="pipeline.i_data" dir="input" dtype_id="1" loc="a,3,3,3,20"/>
          <var name="pipeline.o_data" dir="output" dtype_id="1" loc="a,4,3,4,20"/>
"#,
    );
    for stage in 0..stages {
        body.push_str(&format!(
            "          <var name=\"pipeline.g_pipestage[{stage}].u_pipestage.data_q\" \
             dtype_id=\"1\" loc=\"a,8,5,8,24\"/>\n"
        ));
    }
    for stage in 0..stages {
        let source = if stage == 0 {
            "pipeline.i_data".to_string()
        } else {
            format!("pipeline.g_pipestage[{}].u_pipestage.data_q", stage - 1)
        };
        let line = 10 + stage;
        body.push_str(&format!(
            r#"          <always loc="a,{line},5,{line},60">
            <sentree loc="a,{line},10,{line},30">
              <senitem edgeType="POS" loc="a,{line},12,{line},30">
                <varref name="pipeline.i_clk" dtype_id="2" loc="a,{line},22,{line},27"/>
              </senitem>
            </sentree>
            <assigndly loc="a,{line},32,{line},58">
              <varref name="{source}" dtype_id="1" loc="a,{line},50,{line},58"/>
              <varref name="pipeline.g_pipestage[{stage}].u_pipestage.data_q" dtype_id="1" loc="a,{line},32,{line},46"/>
            </assigndly>
          </always>
"#
        ));
    }
    body.push_str(&format!(
        r#"          <contassign loc="a,30,3,30,40">
            <varref name="pipeline.g_pipestage[{}].u_pipestage.data_q" dtype_id="1" loc="a,30,20,30,38"/>
            <varref name="pipeline.o_data" dtype_id="1" loc="a,30,10,30,16"/>
          </contassign>
"#,
        stages - 1
    ));
    format!(
        r#"<verilator_xml>
  <files>
    <file id="a" filename="rtl/pipeline.sv" language="1800-2012"/>
  </files>
  <netlist>
    <module name="TOP" loc="a,1,1,32,10">
      <topscope loc="a,1,1,32,10">
        <scope name="pipeline" loc="a,1,1,32,10">
{body}        </scope>
      </topscope>
    </module>
    <typetable>
      <basicdtype id="1" name="logic" loc="a,3,3,3,20" left="31" right="0"/>
      <basicdtype id="2" name="logic" loc="a,2,3,2,18"/>
    </typetable>
  </netlist>
</verilator_xml>
"#
    )
}

/// Two inlined tasks whose lowered temporaries must stay separate: one
/// drives `o_foo_inactive` from `i_foo_current`, the other drives
/// `o_next_foo_inactive` from `i_foo_next`.
pub fn vlvbound_xml() -> String {
    r#"<verilator_xml>
  <files>
    <file id="a" filename="rtl/vlvbound.sv" language="1800-2012"/>
  </files>
  <netlist>
    <module name="TOP" loc="a,1,1,30,10">
      <topscope loc="a,1,1,30,10">
        <scope name="vlvbound" loc="a,1,1,30,10">
          <var name="vlvbound.i_foo_current" dir="input" dtype_id="1" loc="a,2,3,2,28"/>
          <var name="vlvbound.i_foo_next" dir="input" dtype_id="1" loc="a,3,3,3,25"/>
          <var name="vlvbound.o_foo_inactive" dir="output" dtype_id="2" loc="a,4,3,4,29"/>
          <var name="vlvbound.o_next_foo_inactive" dir="output" dtype_id="2" loc="a,5,3,5,34"/>
          <var name="vlvbound.s1.t" dtype_id="2" loc="a,10,5,10,20"/>
          <var name="vlvbound.s2.t" dtype_id="2" loc="a,20,5,20,20"/>
          <contassign loc="a,11,5,11,40">
            <redand loc="a,11,20,11,40">
              <varref name="vlvbound.i_foo_current" dtype_id="1" loc="a,11,22,11,36"/>
            </redand>
            <varref name="vlvbound.s1.t" dtype_id="2" loc="a,11,12,11,16"/>
          </contassign>
          <contassign loc="a,12,5,12,36">
            <varref name="vlvbound.s1.t" dtype_id="2" loc="a,12,24,12,28"/>
            <varref name="vlvbound.o_foo_inactive" dtype_id="2" loc="a,12,12,12,20"/>
          </contassign>
          <contassign loc="a,21,5,21,40">
            <redand loc="a,21,20,21,40">
              <varref name="vlvbound.i_foo_next" dtype_id="1" loc="a,21,22,21,33"/>
            </redand>
            <varref name="vlvbound.s2.t" dtype_id="2" loc="a,21,12,21,16"/>
          </contassign>
          <contassign loc="a,22,5,22,42">
            <varref name="vlvbound.s2.t" dtype_id="2" loc="a,22,28,22,32"/>
            <varref name="vlvbound.o_next_foo_inactive" dtype_id="2" loc="a,22,12,22,24"/>
          </contassign>
        </scope>
      </topscope>
    </module>
    <typetable>
      <basicdtype id="1" name="logic" loc="a,2,3,2,28" left="3" right="0"/>
      <basicdtype id="2" name="logic" loc="a,4,3,4,29"/>
    </typetable>
  </netlist>
</verilator_xml>
"#
    .to_string()
}
